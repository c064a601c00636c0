//! Support hardware: interval-timer effect devices.
//!
//! Supports share the ammo bookkeeping of weapons; instead of firing
//! they apply an effect (currently repair) whenever their interval
//! timer has elapsed and a valid target exists. The timer stays in its
//! finished state while no target is available, so the effect fires the
//! moment one appears.

use manor_core::enums::SupportVariant;
use manor_core::timer::Timer;

use crate::profiles::{support_profile, SupportProfile};

/// A placed support device's mutable state.
#[derive(Debug, Clone)]
pub struct SupportInstance {
    variant: SupportVariant,
    profile: SupportProfile,
    effect_timer: Timer,
    ammo: Option<u32>,
}

impl SupportInstance {
    pub fn new(variant: SupportVariant) -> Self {
        Self::with_profile(variant, support_profile(variant))
    }

    pub fn with_profile(variant: SupportVariant, profile: SupportProfile) -> Self {
        let mut support = Self {
            variant,
            profile,
            effect_timer: Timer::new(profile.effect_interval_secs),
            ammo: None,
        };
        support.make_ready();
        support
    }

    pub fn make_ready(&mut self) {
        self.ammo = (self.profile.max_ammo > 0).then_some(self.profile.max_ammo);
        self.effect_timer.activate();
    }

    /// Tick the device. Returns true when the effect should be applied
    /// this tick; the caller performs the actual effect.
    pub fn update(&mut self, has_target: bool, dt: f64) -> bool {
        if !self.effect_timer.check(dt) {
            return false;
        }
        if !has_target {
            return false;
        }

        match self.ammo {
            // Spent kits stop working entirely.
            Some(0) => false,
            Some(remaining) => {
                self.ammo = Some(remaining - 1);
                self.effect_timer.activate();
                true
            }
            None => {
                self.effect_timer.activate();
                true
            }
        }
    }

    pub fn variant(&self) -> SupportVariant {
        self.variant
    }

    pub fn profile(&self) -> &SupportProfile {
        &self.profile
    }

    pub fn ammo(&self) -> Option<u32> {
        self.ammo
    }
}
