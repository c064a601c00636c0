//! End-of-tick bookkeeping: dead enemies, destroyed hardware, and the
//! end-of-defense checks.

use hecs::World;

use manor_core::components::{EnemyAgent, Health};
use manor_core::enums::{GamePhase, HardwareKind};
use manor_core::events::GameEvent;
use manor_core::types::Position;

use crate::mount::{Mount, ScoreState};
use crate::systems::spawner::EnemySpawner;

/// Release finished enemies, tear down destroyed hardware, and decide
/// whether the defense has ended. Returns the terminal phase if it has.
pub fn run(
    world: &mut World,
    mounts: &mut [Mount],
    spawner: &mut EnemySpawner,
    score: &mut ScoreState,
    events: &mut Vec<GameEvent>,
) -> Option<GamePhase> {
    // Enemies killed by the player score; enemies spent on a strike
    // just go back to the pool.
    for (handle, entity) in spawner.live_entities() {
        let active = world
            .get::<&EnemyAgent>(entity)
            .map(|agent| agent.active)
            .unwrap_or(false);
        let dead = world
            .get::<&Health>(entity)
            .map(|health| health.is_dead())
            .unwrap_or(true);

        if active && dead {
            let position = world
                .get::<&Position>(entity)
                .map(|pos| *pos)
                .unwrap_or_default();
            let reward = world
                .get::<&EnemyAgent>(entity)
                .map(|agent| agent.score_reward)
                .unwrap_or(0);
            score.score += reward;
            score.enemies_killed += 1;
            events.push(GameEvent::EnemyKilled {
                position,
                score_reward: reward,
            });
            spawner.release(world, handle);
        } else if !active {
            spawner.release(world, handle);
        }
    }

    // Destroyed hardware comes off its mount.
    let mut vital_weapon_lost = false;
    for mount in mounts.iter_mut() {
        let destroyed = mount
            .hardware
            .as_ref()
            .is_some_and(|unit| unit.health.is_dead());
        if !destroyed {
            continue;
        }
        let Some(unit) = mount.hardware.take() else {
            continue;
        };
        events.push(GameEvent::HardwareDestroyed {
            mount_id: mount.id,
            vital: mount.vital,
        });
        if mount.vital && unit.kind() == HardwareKind::Weapon {
            vital_weapon_lost = true;
        }
    }

    if vital_weapon_lost {
        return Some(GamePhase::GameOver);
    }
    if spawner.schedule_exhausted() && spawner.live_count() == 0 {
        return Some(GamePhase::Victory);
    }
    None
}
