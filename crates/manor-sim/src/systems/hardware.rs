//! Weapon update system.
//!
//! Feeds the shared pointer state to every installed weapon and turns
//! the resulting fire commands into pooled hit-scan launches. A drained
//! projectile pool silently skips the shot, matching the pool-discipline
//! rule that exhaustion is never fatal.

use hecs::World;

use manor_core::events::GameEvent;
use manor_core::pool::InstancePool;
use manor_core::types::PointerState;

use crate::mount::{Mount, ScoreState};
use crate::systems::projectile::HitScanProjectile;

/// Update every installed weapon and launch any resulting shots.
pub fn run(
    world: &mut World,
    mounts: &mut [Mount],
    pointer: &PointerState,
    projectiles: &mut InstancePool<HitScanProjectile>,
    score: &mut ScoreState,
    events: &mut Vec<GameEvent>,
    dt: f64,
) {
    for mount in mounts.iter_mut() {
        let Some(unit) = mount.hardware.as_mut() else {
            continue;
        };
        let Some(weapon) = unit.weapon_mut() else {
            continue;
        };
        let Some(order) = weapon.update(pointer, dt) else {
            continue;
        };

        let Some(handle) = projectiles.acquire() else {
            continue;
        };
        let Some(projectile) = projectiles.get_mut(handle) else {
            continue;
        };
        projectile.launch(
            world,
            order.start,
            order.target,
            order.damage,
            order.flight_budget_secs,
            events,
        );
        score.shots_fired += 1;
        events.push(GameEvent::WeaponFired {
            mount_id: mount.id,
            variant: weapon.variant(),
            damage: order.damage,
        });
    }
}
