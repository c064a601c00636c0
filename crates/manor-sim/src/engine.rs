//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely
//! headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use manor_core::commands::{HardwareSpec, PlayerCommand};
use manor_core::constants::{DEFAULT_SPAWN_TOTAL, DT, PROJECTILE_POOL_CAPACITY};
use manor_core::enums::GamePhase;
use manor_core::events::GameEvent;
use manor_core::pool::{InstancePool, PoolHandle};
use manor_core::state::GameStateSnapshot;
use manor_core::types::{MountId, SimTime};

use crate::input::PointerTracker;
use crate::mount::{HardwareUnit, Mount, ScoreState};
use crate::systems;
use crate::systems::projectile::HitScanProjectile;
use crate::systems::spawner::EnemySpawner;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Enemies in the defense schedule.
    pub spawn_total: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            spawn_total: DEFAULT_SPAWN_TOTAL,
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    spawn_total: u32,
    command_queue: VecDeque<PlayerCommand>,
    pointer: PointerTracker,
    mounts: Vec<Mount>,
    projectiles: InstancePool<HitScanProjectile>,
    spawner: EnemySpawner,
    score: ScoreState,
    events: Vec<GameEvent>,
    expired_trails: Vec<PoolHandle>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        let mut world = World::new();
        let spawner = EnemySpawner::new(
            &mut world,
            world_setup::default_spawn_points(),
            config.spawn_total,
        );
        Self {
            world,
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            spawn_total: config.spawn_total,
            command_queue: VecDeque::new(),
            pointer: PointerTracker::new(),
            mounts: Vec::new(),
            projectiles: InstancePool::new(PROJECTILE_POOL_CAPACITY, HitScanProjectile::prototype()),
            spawner,
            score: ScoreState::default(),
            events: Vec::new(),
            expired_trails: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.score,
            &self.mounts,
            &self.projectiles,
            events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get the mount roster.
    pub fn mounts(&self) -> &[Mount] {
        &self.mounts
    }

    /// Get a read-only reference to the score state.
    #[cfg(test)]
    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    /// Live projectile trail count (for testing).
    #[cfg(test)]
    pub fn live_trails(&self) -> usize {
        self.projectiles.live_count()
    }

    /// Force-activate an enemy at a position (for testing).
    #[cfg(test)]
    pub fn spawn_test_enemy(
        &mut self,
        position: manor_core::types::Position,
    ) -> Option<hecs::Entity> {
        self.spawner.spawn_at(&mut self.world, position)
    }

    /// Overwrite installed hardware durability (for testing).
    #[cfg(test)]
    pub fn set_hardware_health(&mut self, mount_id: MountId, health: i32) {
        if let Some(mount) = self.mounts.iter_mut().find(|mount| mount.id == mount_id) {
            if let Some(unit) = mount.hardware.as_mut() {
                unit.health.current = health;
            }
        }
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Pointer {
                position,
                left_down,
            } => {
                // Input is not consumed while paused or in menus.
                if self.phase == GamePhase::Active {
                    self.pointer.apply(position, left_down);
                }
            }
            PlayerCommand::CancelOperation => {
                for mount in self.mounts.iter_mut() {
                    if let Some(unit) = mount.hardware.as_mut() {
                        if let Some(weapon) = unit.weapon_mut() {
                            weapon.cancel_operation();
                        }
                    }
                }
            }
            PlayerCommand::PlaceHardware { mount_id, spec } => {
                self.place_hardware(mount_id, spec);
            }
            PlayerCommand::StartGame => {
                if matches!(
                    self.phase,
                    GamePhase::MainMenu | GamePhase::GameOver | GamePhase::Victory
                ) {
                    self.start_defense();
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::Reset => {
                self.reset();
            }
        }
    }

    /// Build a fresh estate and put the simulation into play.
    fn start_defense(&mut self) {
        self.world.clear();
        self.mounts = world_setup::setup_estate(&mut self.world);
        self.spawner = EnemySpawner::new(
            &mut self.world,
            world_setup::default_spawn_points(),
            self.spawn_total,
        );
        self.projectiles.release_all();
        self.pointer.clear();
        self.score = ScoreState {
            enemies_total: self.spawn_total,
            ..ScoreState::default()
        };
        self.events.clear();
        self.time = SimTime::default();
        self.phase = GamePhase::Active;
    }

    /// Tear everything down and return to the main menu. In-flight
    /// trails are dropped without their deferred miss reports.
    fn reset(&mut self) {
        self.projectiles.release_all();
        self.spawner.release_all(&mut self.world);
        self.world.clear();
        self.mounts.clear();
        self.pointer.clear();
        self.score = ScoreState::default();
        self.events.clear();
        self.time = SimTime::default();
        self.phase = GamePhase::MainMenu;
    }

    fn place_hardware(&mut self, mount_id: MountId, spec: HardwareSpec) {
        if self.phase != GamePhase::Active {
            return;
        }
        let Some(mount) = self.mounts.iter_mut().find(|mount| mount.id == mount_id) else {
            return;
        };
        if mount.hardware.is_some() {
            return;
        }
        // A vital mount must hold a weapon.
        if mount.vital && matches!(spec, HardwareSpec::Support { .. }) {
            return;
        }
        mount.hardware = Some(HardwareUnit::from_spec(&spec, mount.position));
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let pointer = *self.pointer.state();
        // 1. Weapons (drag state machines, fire resolution)
        systems::hardware::run(
            &mut self.world,
            &mut self.mounts,
            &pointer,
            &mut self.projectiles,
            &mut self.score,
            &mut self.events,
            DT,
        );
        // 2. Support effects
        systems::support::run(&mut self.mounts, DT);
        // 3. Spawning
        systems::spawner::run(
            &mut self.world,
            &mut self.spawner,
            &mut self.rng,
            &mut self.events,
            DT,
        );
        // 4. Enemy seek-and-strike
        systems::enemy_ai::run(&mut self.world, &mut self.mounts);
        // 5. Movement integration
        systems::movement::run(&mut self.world);
        // 6. Trail decay and deferred miss reports
        systems::projectile::run(
            &mut self.projectiles,
            DT,
            &mut self.events,
            &mut self.expired_trails,
        );
        // 7. Cleanup and end-of-defense checks
        self.score.enemies_spawned = self.spawner.spawned;
        if let Some(phase) = systems::cleanup::run(
            &mut self.world,
            &mut self.mounts,
            &mut self.spawner,
            &mut self.score,
            &mut self.events,
        ) {
            self.phase = phase;
            self.events.push(GameEvent::GameEnded {
                victory: phase == GamePhase::Victory,
            });
        }

        // A release edge lasts one tick. Re-feed the same sample so the
        // tracker drops it even when no fresh pointer command arrives.
        if pointer.left_released {
            self.pointer.apply(pointer.position, pointer.left_down);
        }
    }
}
