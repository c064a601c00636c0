//! Enemy seek-and-strike behavior.
//!
//! Each active enemy heads for the nearest occupied mount. On arrival it
//! strikes the installed hardware once and destroys itself; the cleanup
//! pass releases its pool slot without awarding score.

use hecs::World;

use manor_core::components::EnemyAgent;
use manor_core::constants::ENEMY_MELEE_RANGE;
use manor_core::types::{MountId, Position, Velocity};

use crate::mount::Mount;

/// Drive every active enemy: retarget, steer, and strike on arrival.
pub fn run(world: &mut World, mounts: &mut [Mount]) {
    let occupied: Vec<(MountId, Position)> = mounts
        .iter()
        .filter(|mount| mount.hardware.is_some())
        .map(|mount| (mount.id, mount.position))
        .collect();

    let mut strikes: Vec<(hecs::Entity, MountId, i32)> = Vec::new();

    for (entity, (pos, vel, agent)) in
        world.query_mut::<(&Position, &mut Velocity, &mut EnemyAgent)>()
    {
        if !agent.active {
            continue;
        }
        let nearest = occupied
            .iter()
            .min_by(|(_, a), (_, b)| {
                pos.horizontal_range_to(a)
                    .total_cmp(&pos.horizontal_range_to(b))
            })
            .copied();
        let Some((mount_id, mount_pos)) = nearest else {
            agent.target_mount = None;
            *vel = Velocity::default();
            continue;
        };
        agent.target_mount = Some(mount_id);

        let range = pos.horizontal_range_to(&mount_pos);
        if range <= ENEMY_MELEE_RANGE {
            *vel = Velocity::default();
            strikes.push((entity, mount_id, agent.damage));
        } else {
            let dx = (mount_pos.x - pos.x) / range;
            let dy = (mount_pos.y - pos.y) / range;
            *vel = Velocity::new(dx * agent.speed, dy * agent.speed, 0.0);
        }
    }

    for (entity, mount_id, damage) in strikes {
        if let Some(mount) = mounts.iter_mut().find(|mount| mount.id == mount_id) {
            if let Some(unit) = mount.hardware.as_mut() {
                unit.health.take_damage(damage);
            }
        }
        // The strike consumes the enemy.
        if let Ok(mut agent) = world.get::<&mut EnemyAgent>(entity) {
            agent.active = false;
        }
    }
}
