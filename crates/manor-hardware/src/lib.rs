//! Hardware behavior state machines.
//!
//! Weapon aiming, charging, firing, and reloading as mutations over
//! plain data, driven once per tick by the simulation engine.
//! No ECS dependency — the engine feeds in a pointer snapshot and a
//! frame delta, and gets back an optional fire command.

pub mod fsm;
pub mod profiles;
pub mod support;

#[cfg(test)]
mod tests;
