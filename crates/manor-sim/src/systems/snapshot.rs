//! Snapshot system: queries the ECS world and builds a complete
//! GameStateSnapshot.
//!
//! This system is read-only. It never modifies the world.

use hecs::World;

use manor_core::components::{EnemyAgent, Health};
use manor_core::enums::{GamePhase, WeaponState};
use manor_core::events::GameEvent;
use manor_core::pool::InstancePool;
use manor_core::state::*;
use manor_core::types::{Position, SimTime};

use crate::mount::{HardwareDevice, Mount, ScoreState};
use crate::systems::projectile::HitScanProjectile;

/// Build a complete GameStateSnapshot from the current tick's state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    score: &ScoreState,
    mounts: &[Mount],
    projectiles: &InstancePool<HitScanProjectile>,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        score: ScoreView {
            score: score.score,
            enemies_killed: score.enemies_killed,
            enemies_spawned: score.enemies_spawned,
            enemies_total: score.enemies_total,
            shots_fired: score.shots_fired,
        },
        mounts: mounts.iter().map(build_mount).collect(),
        enemies: build_enemies(world),
        projectiles: build_projectiles(projectiles),
        events,
    }
}

fn build_mount(mount: &Mount) -> MountView {
    MountView {
        mount_id: mount.id,
        vital: mount.vital,
        position: mount.position,
        hardware: mount.hardware.as_ref().map(|unit| match &unit.device {
            HardwareDevice::Weapon(weapon) => HardwareView {
                kind: unit.kind(),
                weapon_variant: Some(weapon.variant()),
                support_variant: None,
                health: unit.health.current,
                max_health: unit.health.max,
                ammo: weapon.ammo(),
                state: weapon.state(),
                power_ratio: weapon.power_ratio(),
                charge: weapon.charge(),
                aim_direction: weapon.aim_direction(),
                reload_ratio: weapon.reload_ratio(),
            },
            HardwareDevice::Support(kit) => HardwareView {
                kind: unit.kind(),
                weapon_variant: None,
                support_variant: Some(kit.variant()),
                health: unit.health.current,
                max_health: unit.health.max,
                ammo: kit.ammo(),
                state: WeaponState::Idle,
                power_ratio: 0.0,
                charge: 0.0,
                aim_direction: None,
                reload_ratio: 0.0,
            },
        }),
    }
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies = Vec::new();
    for (_entity, (pos, health, agent)) in
        world.query::<(&Position, &Health, &EnemyAgent)>().iter()
    {
        if !agent.active {
            continue;
        }
        enemies.push(EnemyView {
            position: *pos,
            health: health.current,
            max_health: health.max,
        });
    }
    enemies
}

fn build_projectiles(pool: &InstancePool<HitScanProjectile>) -> Vec<ProjectileView> {
    pool.iter_live()
        .map(|(_, projectile)| ProjectileView {
            start: projectile.start(),
            end: projectile.end(),
            alpha: projectile.alpha(),
            hit: projectile.hit(),
        })
        .collect()
}
