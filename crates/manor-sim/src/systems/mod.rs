//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for
//! read-only). Mount and pool state is passed in explicitly; systems own
//! nothing.

pub mod cleanup;
pub mod enemy_ai;
pub mod hardware;
pub mod movement;
pub mod projectile;
pub mod snapshot;
pub mod spawner;
pub mod support;
