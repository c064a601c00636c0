//! Weapon state machine: Idle → Aiming → (fire) → Reloading → Idle.
//!
//! One driver handles the shared pointer bookkeeping (capture zone,
//! engage, drag, release); `WeaponVariant` selects the small policy
//! functions that differ — whether aiming is allowed, whether a release
//! fires, and where power comes from (drag distance for the crossbow,
//! stored charge for the cannon).

use glam::DVec3;

use manor_core::enums::{WeaponState, WeaponVariant};
use manor_core::timer::Timer;
use manor_core::types::{ratio, PointerState, Position};

use crate::profiles::{weapon_profile, WeaponProfile};

/// Order produced by a successful fire: the engine draws a pooled
/// projectile and launches it with these parameters.
#[derive(Debug, Clone, Copy)]
pub struct FireCommand {
    pub start: Position,
    pub target: Position,
    pub damage: i32,
    pub flight_budget_secs: f64,
}

/// A placed weapon's complete mutable state.
#[derive(Debug, Clone)]
pub struct WeaponInstance {
    variant: WeaponVariant,
    profile: WeaponProfile,
    /// Center of the circular pointer capture zone.
    capture_center: Position,
    /// Anchor from which projectiles depart and ranges are measured.
    launch_anchor: Position,

    // --- Pointer bookkeeping ---
    button_held: bool,
    engaged: bool,
    drag_vector: DVec3,
    drag_distance: f64,

    // --- Aim ---
    aim_direction: Option<DVec3>,
    power_ratio: f64,
    target_position: Position,
    target_acquired: bool,

    // --- Ammo & reload ---
    ammo: Option<u32>,
    reloading: bool,
    reload_timer: Option<Timer>,

    // --- Cannon charge ---
    charge: f64,
    depletion_timer: Option<Timer>,
}

impl WeaponInstance {
    /// Create a ready weapon with the variant's default profile.
    pub fn new(variant: WeaponVariant, capture_center: Position, launch_anchor: Position) -> Self {
        Self::with_profile(variant, weapon_profile(variant), capture_center, launch_anchor)
    }

    /// Create a ready weapon with an explicit profile (used by tests
    /// and upgrade systems).
    pub fn with_profile(
        variant: WeaponVariant,
        profile: WeaponProfile,
        capture_center: Position,
        launch_anchor: Position,
    ) -> Self {
        let reload_timer = (profile.reload_secs > 0.0).then(|| Timer::new(profile.reload_secs));
        let depletion_timer = (variant == WeaponVariant::Cannon)
            .then(|| Timer::new(profile.charge_depletion_interval_secs));
        let mut weapon = Self {
            variant,
            profile,
            capture_center,
            launch_anchor,
            button_held: false,
            engaged: false,
            drag_vector: DVec3::ZERO,
            drag_distance: 0.0,
            aim_direction: None,
            power_ratio: 0.0,
            target_position: launch_anchor,
            target_acquired: false,
            ammo: None,
            reloading: false,
            reload_timer,
            charge: 0.0,
            depletion_timer,
        };
        weapon.make_ready();
        weapon
    }

    /// Restore the weapon to its ready state: reload cleared, ammo
    /// refilled to maximum (partial reloads are not modeled).
    pub fn make_ready(&mut self) {
        self.reloading = false;
        if let Some(timer) = &mut self.reload_timer {
            timer.reset();
        }
        self.ammo = (self.profile.max_ammo > 0).then_some(self.profile.max_ammo);
    }

    /// Tick the weapon once. Returns a fire command when this tick's
    /// pointer release produced a shot.
    pub fn update(&mut self, pointer: &PointerState, dt: f64) -> Option<FireCommand> {
        let fired = if self.reloading {
            self.update_reload(dt);
            None
        } else {
            self.update_weapon(pointer)
        };

        // Charge leaks even while idle or reloading.
        self.update_charge_depletion(dt);

        fired
    }

    /// Abort any in-progress aim; the cannon also dumps its charge.
    pub fn cancel_operation(&mut self) {
        self.clear_engagement();
        if self.variant == WeaponVariant::Cannon {
            self.charge = 0.0;
            if let Some(timer) = &mut self.depletion_timer {
                timer.reset();
            }
        }
    }

    // --- Per-tick driver ---

    fn update_weapon(&mut self, pointer: &PointerState) -> Option<FireCommand> {
        let hovered = !self.button_held && self.pointer_in_capture_zone(pointer);

        let fired = if pointer.left_down {
            self.button_held = true;
            // Cannon power is its stored charge. Resampling every held
            // tick lets depletion during a long drag lower the shot.
            if self.variant == WeaponVariant::Cannon {
                self.power_ratio = self.charge;
            }
            None
        } else if pointer.left_released {
            self.release()
        } else {
            // No release edge this tick. A cleared tracker can skip
            // the edge entirely, so drop any leftover engagement.
            if self.button_held {
                self.clear_engagement();
            }
            None
        };

        if self.button_held && (self.engaged || hovered) {
            self.update_aim(pointer);
        }

        fired
    }

    fn update_reload(&mut self, dt: f64) {
        let done = match &mut self.reload_timer {
            Some(timer) => timer.check(dt),
            None => true,
        };
        if done {
            self.make_ready();
        }
    }

    fn release(&mut self) -> Option<FireCommand> {
        let try_fire = self.can_fire();
        self.button_held = false;

        if !self.engaged {
            self.target_acquired = false;
            return None;
        }
        self.engaged = false;

        let fired = match self.variant {
            WeaponVariant::Crossbow => {
                if try_fire {
                    self.try_to_fire()
                } else {
                    None
                }
            }
            WeaponVariant::Cannon => {
                if !self.target_acquired {
                    // Clicked without dragging to a target: pump the charge.
                    self.fill_charge();
                    None
                } else if try_fire && self.drag_distance >= self.profile.min_drag_dist {
                    self.power_ratio = self.charge;
                    self.try_to_fire()
                } else {
                    None
                }
            }
        };

        self.target_acquired = false;
        fired
    }

    fn update_aim(&mut self, pointer: &PointerState) {
        self.engaged = true;

        // Slingshot drag: pull away from the press point, fire the
        // other way.
        self.drag_vector = pointer.down_position.to_dvec3() - pointer.position.to_dvec3();
        self.drag_distance = self.drag_vector.length();

        if self.can_aim() {
            self.aim();
        }
    }

    fn aim(&mut self) {
        if self.variant == WeaponVariant::Crossbow {
            self.power_ratio = ratio(
                self.drag_distance,
                self.profile.min_drag_dist,
                self.profile.max_drag_dist,
            );
        }

        let direction = self.drag_vector / self.drag_distance;
        self.aim_direction = Some(direction);

        let range = self.profile.min_range
            + (self.profile.max_range - self.profile.min_range) * self.power_ratio;
        self.target_position =
            Position::from_dvec3(self.launch_anchor.to_dvec3() + direction * range);
        self.target_acquired = true;
    }

    // --- Policy functions ---

    fn can_aim(&self) -> bool {
        match self.variant {
            WeaponVariant::Crossbow => self.drag_distance > 0.0,
            WeaponVariant::Cannon => self.drag_distance >= self.profile.min_drag_dist,
        }
    }

    fn can_fire(&self) -> bool {
        match self.variant {
            WeaponVariant::Crossbow => self.drag_distance >= self.profile.min_drag_dist,
            WeaponVariant::Cannon => self.charge > self.profile.min_charge_to_fire,
        }
    }

    // --- Firing ---

    fn try_to_fire(&mut self) -> Option<FireCommand> {
        match self.ammo {
            // Ammo-limited and depleted: the attempt silently fails.
            Some(0) => return None,
            Some(remaining) => self.ammo = Some(remaining - 1),
            None => {}
        }

        let span = (self.profile.max_damage - self.profile.min_damage) as f64;
        let damage = (self.profile.min_damage as f64 + span * self.power_ratio).floor() as i32;

        let command = FireCommand {
            start: self.launch_anchor,
            target: self.target_position,
            damage,
            flight_budget_secs: self.profile.flight_budget_secs,
        };

        if self.variant == WeaponVariant::Cannon {
            self.charge = 0.0;
            if let Some(timer) = &mut self.depletion_timer {
                timer.reset();
            }
        }

        self.start_reloading();
        Some(command)
    }

    fn start_reloading(&mut self) {
        self.clear_engagement();
        if let Some(timer) = &mut self.reload_timer {
            self.reloading = true;
            timer.activate();
        }
    }

    // --- Cannon charge ---

    fn fill_charge(&mut self) {
        self.charge = (self.charge + self.profile.charge_fill_amount).clamp(0.0, 1.0);
        if let Some(timer) = &mut self.depletion_timer {
            if !timer.is_active() || timer.is_finished() {
                timer.activate();
            }
        }
    }

    fn update_charge_depletion(&mut self, dt: f64) {
        if self.charge <= 0.0 {
            return;
        }
        let Some(timer) = &mut self.depletion_timer else {
            return;
        };
        if timer.check(dt) {
            self.charge =
                (self.charge - self.profile.charge_depletion_amount).clamp(0.0, 1.0);
            if self.charge > 0.0 {
                timer.activate();
            } else {
                timer.reset();
            }
        }
    }

    // --- Shared bookkeeping ---

    fn clear_engagement(&mut self) {
        self.button_held = false;
        self.engaged = false;
        self.target_acquired = false;
    }

    fn pointer_in_capture_zone(&self, pointer: &PointerState) -> bool {
        pointer.position.range_to(&self.capture_center) <= self.profile.click_radius
    }

    // --- Accessors ---

    pub fn state(&self) -> WeaponState {
        if self.reloading {
            WeaponState::Reloading
        } else if self.engaged {
            WeaponState::Aiming
        } else {
            WeaponState::Idle
        }
    }

    pub fn variant(&self) -> WeaponVariant {
        self.variant
    }

    pub fn profile(&self) -> &WeaponProfile {
        &self.profile
    }

    /// Remaining ammo; `None` for ammo-unlimited weapons.
    pub fn ammo(&self) -> Option<u32> {
        self.ammo
    }

    pub fn charge(&self) -> f64 {
        self.charge
    }

    pub fn power_ratio(&self) -> f64 {
        self.power_ratio
    }

    pub fn target_position(&self) -> Position {
        self.target_position
    }

    pub fn target_acquired(&self) -> bool {
        self.target_acquired
    }

    pub fn aim_direction(&self) -> Option<Position> {
        self.aim_direction.map(Position::from_dvec3)
    }

    /// Reload progress in [0, 1]; 0 when not reloading.
    pub fn reload_ratio(&self) -> f64 {
        if !self.reloading {
            return 0.0;
        }
        self.reload_timer.as_ref().map_or(0.0, |t| t.ratio())
    }
}
