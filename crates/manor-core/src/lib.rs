//! Shared data model for MANOR.
//!
//! Plain types, enums, tuning constants, and the two leaf utilities
//! (countdown timers and reusable-instance pools) used by every other
//! crate in the workspace. No ECS or engine dependency.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod pool;
pub mod state;
pub mod timer;
pub mod types;
