//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Pools ---

/// Projectile pool capacity, shared by every weapon. Rapid fire past
/// this many in-flight trails simply skips the shot.
pub const PROJECTILE_POOL_CAPACITY: usize = 8;

/// Maximum concurrent live enemies.
pub const ENEMY_POOL_CAPACITY: usize = 10;

// --- Projectiles ---

/// Trail lifetime when the launcher does not specify one (seconds).
pub const DEFAULT_FLIGHT_BUDGET_SECS: f64 = 0.5;

// --- Enemies ---

pub const ENEMY_MAX_HEALTH: i32 = 10;

/// Melee damage dealt to hardware on arrival.
pub const ENEMY_MELEE_DAMAGE: i32 = 10;

/// Enemy movement speed (m/s).
pub const ENEMY_SPEED: f64 = 3.0;

/// Score awarded per kill.
pub const ENEMY_SCORE_REWARD: u32 = 10;

/// Range at which an enemy strikes its target hardware (meters).
pub const ENEMY_MELEE_RANGE: f64 = 2.0;

/// Enemy collision sphere radius for hit-scan tests (meters).
pub const ENEMY_COLLIDER_RADIUS: f64 = 0.5;

// --- Spawning ---

/// Interval between spawn attempts (seconds).
pub const SPAWN_INTERVAL_SECS: f64 = 2.0;

/// Total enemies in the default defense schedule.
pub const DEFAULT_SPAWN_TOTAL: u32 = 30;

// --- Hardware ---

pub const HARDWARE_MAX_HEALTH: i32 = 100;

/// Health restored per repair kit effect use.
pub const REPAIR_AMOUNT: i32 = 15;
