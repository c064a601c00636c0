//! Enemy spawner — reactivates pooled enemies on a fixed interval.
//!
//! Enemy entities live for the whole session; the spawner owns the pool
//! that gates how many are in play at once. A full pool skips the spawn
//! attempt and tries again next interval.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use manor_core::constants::{ENEMY_POOL_CAPACITY, SPAWN_INTERVAL_SECS};
use manor_core::events::GameEvent;
use manor_core::pool::{InstancePool, PoolHandle};
use manor_core::timer::Timer;
use manor_core::types::Position;

use crate::world_setup;

/// A pool slot wrapping a pre-spawned dormant enemy entity.
#[derive(Debug, Clone)]
pub struct EnemySlot {
    pub entity: Option<hecs::Entity>,
}

/// Spawn schedule plus the pool of reusable enemy entities.
pub struct EnemySpawner {
    spawn_timer: Timer,
    spawn_points: Vec<Position>,
    /// Total enemies in the defense schedule.
    pub total: u32,
    /// Enemies put into play so far.
    pub spawned: u32,
    pool: InstancePool<EnemySlot>,
}

impl EnemySpawner {
    /// Build a spawner and pre-spawn its dormant enemy entities.
    pub fn new(world: &mut World, spawn_points: Vec<Position>, total: u32) -> Self {
        assert!(
            !spawn_points.is_empty(),
            "spawner needs at least one spawn point"
        );
        let pool = InstancePool::with_init(
            ENEMY_POOL_CAPACITY,
            EnemySlot { entity: None },
            |slot, _index| {
                slot.entity = Some(world_setup::spawn_dormant_enemy(world));
            },
        );
        let mut spawn_timer = Timer::new(SPAWN_INTERVAL_SECS);
        spawn_timer.activate();
        Self {
            spawn_timer,
            spawn_points,
            total,
            spawned: 0,
            pool,
        }
    }

    /// Whether the whole schedule has been put into play.
    pub fn schedule_exhausted(&self) -> bool {
        self.spawned >= self.total
    }

    pub fn live_count(&self) -> usize {
        self.pool.live_count()
    }

    /// Live (handle, entity) pairs for the cleanup pass.
    pub fn live_entities(&self) -> Vec<(PoolHandle, hecs::Entity)> {
        self.pool
            .iter_live()
            .filter_map(|(handle, slot)| slot.entity.map(|entity| (handle, entity)))
            .collect()
    }

    /// Return a slot to the pool. The entity itself stays in the world,
    /// parked dormant.
    pub fn release(&mut self, world: &mut World, handle: PoolHandle) {
        if let Some(slot) = self.pool.get(handle) {
            if let Some(entity) = slot.entity {
                world_setup::park_enemy(world, entity);
            }
        }
        let released = self.pool.release(handle);
        debug_assert!(released.is_ok(), "released enemy slot was not live");
    }

    /// Park every live enemy and clear the pool. No kill or miss
    /// bookkeeping happens; this is the reset path.
    pub fn release_all(&mut self, world: &mut World) {
        for (_, entity) in self.live_entities() {
            world_setup::park_enemy(world, entity);
        }
        self.pool.release_all();
    }

    /// Force-activate one enemy at a position (for testing).
    #[cfg(test)]
    pub fn spawn_at(&mut self, world: &mut World, position: Position) -> Option<hecs::Entity> {
        let handle = self.pool.acquire()?;
        let entity = self.pool.get(handle).and_then(|slot| slot.entity)?;
        world_setup::reset_enemy(world, entity, position);
        self.spawned += 1;
        Some(entity)
    }
}

/// Advance the spawn clock and put the next scheduled enemy into play.
pub fn run(
    world: &mut World,
    spawner: &mut EnemySpawner,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<GameEvent>,
    dt: f64,
) {
    if spawner.schedule_exhausted() {
        return;
    }
    if !spawner.spawn_timer.check(dt) {
        return;
    }

    if let Some(handle) = spawner.pool.acquire() {
        let entity = spawner.pool.get(handle).and_then(|slot| slot.entity);
        if let Some(entity) = entity {
            let point = spawner.spawn_points[rng.gen_range(0..spawner.spawn_points.len())];
            world_setup::reset_enemy(world, entity, point);
            spawner.spawned += 1;
            events.push(GameEvent::EnemySpawned { position: point });
        } else {
            // Every pre-spawned slot carries its dormant entity.
            let released = spawner.pool.release(handle);
            debug_assert!(released.is_ok(), "acquired slot turned not-live");
        }
    }
    // Rearm either way; a full pool retries next interval.
    spawner.spawn_timer.activate();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "released enemy slot was not live")]
    fn test_releasing_a_stale_slot_panics() {
        let mut world = World::new();
        let point = Position::new(0.0, 20.0, 0.0);
        let mut spawner = EnemySpawner::new(&mut world, vec![point], 5);
        spawner.spawn_at(&mut world, point).expect("pool has room");

        let (handle, _) = spawner.live_entities()[0];
        spawner.release(&mut world, handle);
        spawner.release(&mut world, handle);
    }
}
