//! Entity spawn factories for setting up the simulation world.
//!
//! Creates scenery, dormant pooled enemies, and the default estate
//! mount layout. Enemies are never spawned mid-game; the spawner
//! reactivates dormant entities instead.

use hecs::World;

use manor_core::commands::HardwareSpec;
use manor_core::components::{Collider, EnemyAgent, Health, Scenery};
use manor_core::constants::*;
use manor_core::enums::{TargetKind, WeaponVariant};
use manor_core::types::{Position, Velocity};

use crate::mount::{HardwareUnit, Mount};

/// Position far outside play where dormant enemies park.
const DORMANT_PARK: Position = Position {
    x: 0.0,
    y: 1000.0,
    z: 0.0,
};

/// Set up the estate: scenery plus the mount roster. Mount 0 is vital
/// and starts with a crossbow installed; the rest start empty.
pub fn setup_estate(world: &mut World) -> Vec<Mount> {
    // Garden walls flanking the approach. Off the direct line between
    // the vital mount and the spawn points, so they only eat shots
    // aimed wide.
    spawn_scenery(world, Position::new(4.0, 5.0, 0.0), 1.0);
    spawn_scenery(world, Position::new(-4.0, 5.0, 0.0), 1.0);

    let mut mounts = vec![
        Mount::new(0, Position::new(0.0, 0.0, 0.0), true),
        Mount::new(1, Position::new(6.0, 0.0, 0.0), false),
        Mount::new(2, Position::new(-6.0, 0.0, 0.0), false),
    ];
    let spec = HardwareSpec::Weapon {
        variant: WeaponVariant::Crossbow,
    };
    mounts[0].hardware = Some(HardwareUnit::from_spec(&spec, mounts[0].position));
    mounts
}

/// Spawn points along the estate's northern approach.
pub fn default_spawn_points() -> Vec<Position> {
    vec![
        Position::new(0.0, 20.0, 0.0),
        Position::new(8.0, 18.0, 0.0),
        Position::new(-8.0, 18.0, 0.0),
    ]
}

/// Spawn a static scenery obstacle.
pub fn spawn_scenery(world: &mut World, position: Position, radius: f64) -> hecs::Entity {
    world.spawn((
        Scenery,
        position,
        Collider {
            radius,
            kind: TargetKind::Scenery,
        },
    ))
}

/// Spawn a dormant enemy entity for the pool. It stays parked and
/// inactive until the spawner reactivates it.
pub fn spawn_dormant_enemy(world: &mut World) -> hecs::Entity {
    world.spawn((
        DORMANT_PARK,
        Velocity::default(),
        Health::new(ENEMY_MAX_HEALTH),
        Collider {
            radius: ENEMY_COLLIDER_RADIUS,
            kind: TargetKind::Enemy,
        },
        EnemyAgent {
            active: false,
            speed: ENEMY_SPEED,
            damage: ENEMY_MELEE_DAMAGE,
            score_reward: ENEMY_SCORE_REWARD,
            target_mount: None,
        },
    ))
}

/// Reactivate a pooled enemy at a spawn point with fresh state.
pub fn reset_enemy(world: &mut World, entity: hecs::Entity, position: Position) {
    if let Ok(mut pos) = world.get::<&mut Position>(entity) {
        *pos = position;
    }
    if let Ok(mut vel) = world.get::<&mut Velocity>(entity) {
        *vel = Velocity::default();
    }
    if let Ok(mut health) = world.get::<&mut Health>(entity) {
        *health = Health::new(ENEMY_MAX_HEALTH);
    }
    if let Ok(mut agent) = world.get::<&mut EnemyAgent>(entity) {
        agent.active = true;
        agent.target_mount = None;
    }
}

/// Park a pooled enemy back into dormancy.
pub fn park_enemy(world: &mut World, entity: hecs::Entity) {
    if let Ok(mut agent) = world.get::<&mut EnemyAgent>(entity) {
        agent.active = false;
        agent.target_mount = None;
    }
    if let Ok(mut vel) = world.get::<&mut Velocity>(entity) {
        *vel = Velocity::default();
    }
    if let Ok(mut pos) = world.get::<&mut Position>(entity) {
        *pos = DORMANT_PARK;
    }
}
