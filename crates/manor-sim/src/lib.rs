//! Headless simulation driver for the estate defense game.
//!
//! [`SimulationEngine`] owns the ECS world, the mount roster, the pooled
//! projectile trails, and the enemy spawner. Callers queue
//! [`PlayerCommand`](manor_core::commands::PlayerCommand)s, call
//! [`SimulationEngine::tick`] at a fixed rate, and read back a
//! [`GameStateSnapshot`](manor_core::state::GameStateSnapshot) each tick.

pub mod engine;
pub mod input;
pub mod mount;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
