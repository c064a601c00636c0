//! Events emitted by the simulation for the score sink and UI feedback.
//!
//! Exactly one of `ProjectileHit` or `ProjectileMissed` is emitted per
//! launched projectile: the hit fires synchronously at launch, the miss
//! is deferred until the trail expires.

use serde::{Deserialize, Serialize};

use crate::enums::{TargetKind, WeaponVariant};
use crate::types::{MountId, Position};

/// One-way notifications drained into the snapshot each tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A weapon released a projectile.
    WeaponFired {
        mount_id: MountId,
        variant: WeaponVariant,
        damage: i32,
    },
    /// A hit-scan ray connected with a target.
    ProjectileHit {
        target: TargetKind,
        position: Position,
        damage: i32,
    },
    /// A trail expired without its ray having connected.
    ProjectileMissed { position: Position },
    /// An enemy entered the world.
    EnemySpawned { position: Position },
    /// An enemy was destroyed; the score sink consumes the reward.
    EnemyKilled { position: Position, score_reward: u32 },
    /// Hardware on a mount was destroyed.
    HardwareDestroyed { mount_id: MountId, vital: bool },
    /// The defense ended.
    GameEnded { victory: bool },
}
