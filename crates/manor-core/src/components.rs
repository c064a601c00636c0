//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods beyond trivial
//! constructors. Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::TargetKind;
use crate::types::MountId;

/// Damage-receiving capability: anything a hit-scan ray or enemy melee
/// can hurt carries one of these.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

impl Health {
    pub fn new(max: i32) -> Self {
        Self { current: max, max }
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.current = (self.current - amount).max(0);
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0
    }
}

/// Collision sphere for hit-scan segment tests.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Collider {
    pub radius: f64,
    pub kind: TargetKind,
}

/// Enemy behavior state. Pool-disciplined: the entity exists for the
/// whole session and `active` marks whether it is in play.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemyAgent {
    pub active: bool,
    /// Movement speed (m/s).
    pub speed: f64,
    /// Melee damage dealt to hardware on arrival.
    pub damage: i32,
    /// Score awarded on kill.
    pub score_reward: u32,
    /// Mount currently being sought (if any hardware is alive).
    pub target_mount: Option<MountId>,
}

/// Marks an entity as static scenery (walls, furniture). Scenery is a
/// valid non-primary hit-scan target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Scenery;
