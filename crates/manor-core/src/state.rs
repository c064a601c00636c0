//! Game state snapshot — the complete visible state sent to the frontend each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{MountId, Position, SimTime};

/// Complete game state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub score: ScoreView,
    pub mounts: Vec<MountView>,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    pub events: Vec<GameEvent>,
}

/// A hardware mount and whatever occupies it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MountView {
    pub mount_id: MountId,
    pub vital: bool,
    pub position: Position,
    pub hardware: Option<HardwareView>,
}

/// Hardware occupying a mount.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HardwareView {
    pub kind: HardwareKind,
    pub weapon_variant: Option<WeaponVariant>,
    pub support_variant: Option<SupportVariant>,
    pub health: i32,
    pub max_health: i32,
    /// Remaining ammo; `None` for ammo-unlimited hardware.
    pub ammo: Option<u32>,
    pub state: WeaponState,
    /// Normalized power of the current drag/charge.
    pub power_ratio: f64,
    /// Stored charge (cannon only).
    pub charge: f64,
    /// Aim direction while aiming (unit vector).
    pub aim_direction: Option<Position>,
    /// Reload progress in [0, 1] while reloading.
    pub reload_ratio: f64,
}

/// A live enemy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnemyView {
    pub position: Position,
    pub health: i32,
    pub max_health: i32,
}

/// A visible projectile trail.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectileView {
    pub start: Position,
    pub end: Position,
    /// Trail opacity, fading linearly from 1 to 0 over the flight budget.
    pub alpha: f64,
    /// Whether this trail's ray connected.
    pub hit: bool,
}

/// Running score for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub score: u32,
    pub enemies_killed: u32,
    pub enemies_spawned: u32,
    pub enemies_total: u32,
    pub shots_fired: u32,
}
