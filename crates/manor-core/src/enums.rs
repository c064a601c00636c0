//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    Active,
    Paused,
    /// The vital mount's weapon was destroyed.
    GameOver,
    /// The full spawn schedule was survived.
    Victory,
}

/// Hardware category for mount placement rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HardwareKind {
    Weapon,
    Support,
}

/// Weapon variant, selecting the aim/fire policy functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponVariant {
    /// Drag-to-fire: power is a direct function of drag distance.
    Crossbow,
    /// Charge-to-fire: power is accumulated across press-release
    /// cycles and leaks away over time.
    Cannon,
}

/// Support hardware variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupportVariant {
    /// Periodically restores health to nearby damaged hardware.
    RepairKit,
}

/// Weapon state machine state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeaponState {
    /// Waiting for pointer engagement inside the capture zone.
    #[default]
    Idle,
    /// Pointer engaged, drag in progress.
    Aiming,
    /// Reload timer counting down; ammo restored on completion.
    Reloading,
}

/// Classification of a hit-scan candidate.
///
/// Enemies are primary targets: they draw the shot even when scenery
/// sits closer along the ray.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetKind {
    Enemy,
    Scenery,
}
