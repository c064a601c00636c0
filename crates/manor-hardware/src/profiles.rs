//! Variant-specific stat profiles.
//!
//! Consolidates per-variant tuning for the weapon state machine and
//! support hardware.

use manor_core::constants::REPAIR_AMOUNT;
use manor_core::enums::{SupportVariant, WeaponVariant};

/// Stat profile for a weapon variant.
#[derive(Debug, Clone, Copy)]
pub struct WeaponProfile {
    /// Magazine size. 0 means the weapon consumes no ammunition.
    pub max_ammo: u32,
    /// Damage at power ratio 0.
    pub min_damage: i32,
    /// Damage at power ratio 1.
    pub max_damage: i32,
    /// Reload duration after a successful fire (seconds). 0 disables
    /// reloading.
    pub reload_secs: f64,
    /// Target range at power ratio 0 (meters).
    pub min_range: f64,
    /// Target range at power ratio 1 (meters).
    pub max_range: f64,
    /// Drag distance below which a release does not fire (meters).
    pub min_drag_dist: f64,
    /// Drag distance at which power saturates (meters).
    pub max_drag_dist: f64,
    /// Capture zone radius around the mount (meters).
    pub click_radius: f64,
    /// Projectile trail lifetime (seconds).
    pub flight_budget_secs: f64,

    // --- Cannon charge tuning (zero for drag-powered variants) ---
    /// Minimum stored charge required to fire.
    pub min_charge_to_fire: f64,
    /// Charge gained per press-release cycle without a target.
    pub charge_fill_amount: f64,
    /// Charge lost per depletion interval.
    pub charge_depletion_amount: f64,
    /// Depletion interval length (seconds).
    pub charge_depletion_interval_secs: f64,
}

/// Stat profile for a support variant.
#[derive(Debug, Clone, Copy)]
pub struct SupportProfile {
    /// Uses available before the kit is spent. 0 means unlimited.
    pub max_ammo: u32,
    /// Minimum time between effect uses (seconds).
    pub effect_interval_secs: f64,
    /// Maximum range at which the effect applies (meters).
    pub max_range: f64,
    /// Effect magnitude (health restored per use for repair kits).
    pub amount: i32,
}

/// Get the stat profile for a weapon variant.
pub fn weapon_profile(variant: WeaponVariant) -> WeaponProfile {
    match variant {
        WeaponVariant::Crossbow => WeaponProfile {
            max_ammo: 10,
            min_damage: 1,
            max_damage: 5,
            reload_secs: 2.0,
            min_range: 0.5,
            max_range: 5.0,
            min_drag_dist: 1.0,
            max_drag_dist: 3.0,
            click_radius: 1.0,
            flight_budget_secs: 0.4,
            min_charge_to_fire: 0.0,
            charge_fill_amount: 0.0,
            charge_depletion_amount: 0.0,
            charge_depletion_interval_secs: 0.0,
        },
        WeaponVariant::Cannon => WeaponProfile {
            max_ammo: 6,
            min_damage: 4,
            max_damage: 12,
            reload_secs: 3.0,
            min_range: 1.0,
            max_range: 8.0,
            min_drag_dist: 1.0,
            max_drag_dist: 3.0,
            click_radius: 1.0,
            flight_budget_secs: 0.5,
            min_charge_to_fire: 0.5,
            charge_fill_amount: 0.2,
            charge_depletion_amount: 0.1,
            charge_depletion_interval_secs: 0.3,
        },
    }
}

/// Get the stat profile for a support variant.
pub fn support_profile(variant: SupportVariant) -> SupportProfile {
    match variant {
        SupportVariant::RepairKit => SupportProfile {
            max_ammo: 10,
            effect_interval_secs: 3.0,
            max_range: 6.0,
            amount: REPAIR_AMOUNT,
        },
    }
}
