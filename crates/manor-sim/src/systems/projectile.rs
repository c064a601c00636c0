//! Pooled hit-scan projectiles.
//!
//! A launch resolves its ray against the world synchronously; the pooled
//! instance then lives on only as a fading trail. Hits are reported at
//! launch, misses when the trail expires, so every launch produces
//! exactly one outcome event.

use glam::DVec3;
use hecs::World;

use manor_core::components::{Collider, EnemyAgent, Health, Scenery};
use manor_core::constants::DEFAULT_FLIGHT_BUDGET_SECS;
use manor_core::events::GameEvent;
use manor_core::pool::{InstancePool, PoolHandle};
use manor_core::timer::Timer;
use manor_core::types::Position;

/// One pooled hit-scan projectile: resolved ray plus trail lifetime.
#[derive(Debug, Clone)]
pub struct HitScanProjectile {
    start: Position,
    end: Position,
    damage: i32,
    hit: bool,
    trail_timer: Timer,
}

impl HitScanProjectile {
    /// Dormant prototype for pool construction.
    pub fn prototype() -> Self {
        Self {
            start: Position::default(),
            end: Position::default(),
            damage: 0,
            hit: false,
            trail_timer: Timer::new(DEFAULT_FLIGHT_BUDGET_SECS),
        }
    }

    /// Fire this projectile: cast the ray, apply damage to whatever it
    /// connects with, and start the trail clock. Enemies are primary
    /// targets; a ray that crosses both scenery and an enemy always
    /// resolves against the nearest enemy.
    pub fn launch(
        &mut self,
        world: &mut World,
        start: Position,
        target: Position,
        damage: i32,
        flight_budget_secs: f64,
        events: &mut Vec<GameEvent>,
    ) {
        let budget = if flight_budget_secs > 0.0 {
            flight_budget_secs
        } else {
            DEFAULT_FLIGHT_BUDGET_SECS
        };
        self.trail_timer = Timer::new(budget);
        self.trail_timer.activate();
        self.start = start;
        self.end = target;
        self.damage = damage;
        self.hit = false;

        let origin = start.to_dvec3();
        let span = target.to_dvec3() - origin;
        let length = span.length();
        if length <= f64::EPSILON {
            return;
        }
        let dir = span / length;

        let mut best_enemy: Option<(hecs::Entity, f64)> = None;
        for (entity, (pos, collider, agent)) in
            world.query::<(&Position, &Collider, &EnemyAgent)>().iter()
        {
            if !agent.active {
                continue;
            }
            if let Some(t) = segment_sphere_entry(origin, dir, length, pos.to_dvec3(), collider.radius)
            {
                if best_enemy.is_none_or(|(_, best_t)| t < best_t) {
                    best_enemy = Some((entity, t));
                }
            }
        }

        let mut best_scenery: Option<(hecs::Entity, f64)> = None;
        if best_enemy.is_none() {
            for (entity, (pos, collider, _scenery)) in
                world.query::<(&Position, &Collider, &Scenery)>().iter()
            {
                if let Some(t) =
                    segment_sphere_entry(origin, dir, length, pos.to_dvec3(), collider.radius)
                {
                    if best_scenery.is_none_or(|(_, best_t)| t < best_t) {
                        best_scenery = Some((entity, t));
                    }
                }
            }
        }

        let chosen = best_enemy.or(best_scenery);
        let Some((entity, t)) = chosen else {
            return;
        };

        let contact = Position::from_dvec3(origin + dir * t);
        self.end = contact;
        self.hit = true;

        let kind = match world.get::<&Collider>(entity) {
            Ok(collider) => collider.kind,
            Err(_) => return,
        };
        if let Ok(mut health) = world.get::<&mut Health>(entity) {
            health.take_damage(damage);
        }
        events.push(GameEvent::ProjectileHit {
            target: kind,
            position: contact,
            damage,
        });
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn end(&self) -> Position {
        self.end
    }

    pub fn hit(&self) -> bool {
        self.hit
    }

    /// Trail opacity, fading linearly from 1 to 0 over the flight budget.
    pub fn alpha(&self) -> f64 {
        1.0 - self.trail_timer.ratio()
    }
}

/// Advance trail clocks, emit deferred miss reports, and release expired
/// trails back to the pool.
pub fn run(
    pool: &mut InstancePool<HitScanProjectile>,
    dt: f64,
    events: &mut Vec<GameEvent>,
    expired: &mut Vec<PoolHandle>,
) {
    expired.clear();
    for (handle, projectile) in pool.iter_live_mut() {
        if projectile.trail_timer.check(dt) {
            if !projectile.hit {
                events.push(GameEvent::ProjectileMissed {
                    position: projectile.end,
                });
            }
            expired.push(handle);
        }
    }
    for handle in expired.drain(..) {
        let released = pool.release(handle);
        debug_assert!(released.is_ok(), "expired trail slot was not live");
    }
}

/// First intersection parameter (distance along `dir` from `origin`) of
/// the segment `[0, length]` with a sphere, or `None` if they do not
/// meet. A segment starting inside the sphere reports entry at 0.
fn segment_sphere_entry(
    origin: DVec3,
    dir: DVec3,
    length: f64,
    center: DVec3,
    radius: f64,
) -> Option<f64> {
    let to_center = center - origin;
    let along = to_center.dot(dir);
    let closest_sq = to_center.length_squared() - along * along;
    let radius_sq = radius * radius;
    if closest_sq > radius_sq {
        return None;
    }
    let half_chord = (radius_sq - closest_sq).sqrt();
    let entry = along - half_chord;
    let exit = along + half_chord;
    if exit < 0.0 {
        return None;
    }
    let t = entry.max(0.0);
    if t > length {
        return None;
    }
    Some(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_sphere_entry_basic() {
        let origin = DVec3::ZERO;
        let dir = DVec3::new(0.0, 1.0, 0.0);
        // Sphere centered 3 ahead, radius 0.5: entry at 2.5.
        let t = segment_sphere_entry(origin, dir, 5.0, DVec3::new(0.0, 3.0, 0.0), 0.5);
        assert!((t.unwrap() - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_segment_sphere_entry_misses_offset_sphere() {
        let origin = DVec3::ZERO;
        let dir = DVec3::new(0.0, 1.0, 0.0);
        let t = segment_sphere_entry(origin, dir, 5.0, DVec3::new(2.0, 3.0, 0.0), 0.5);
        assert!(t.is_none());
    }

    #[test]
    fn test_segment_sphere_entry_respects_segment_length() {
        let origin = DVec3::ZERO;
        let dir = DVec3::new(0.0, 1.0, 0.0);
        // Sphere starts at y = 5.5 but the segment ends at 5.0.
        let t = segment_sphere_entry(origin, dir, 5.0, DVec3::new(0.0, 6.0, 0.0), 0.5);
        assert!(t.is_none());
    }

    #[test]
    fn test_segment_sphere_entry_inside_sphere() {
        let origin = DVec3::ZERO;
        let dir = DVec3::new(0.0, 1.0, 0.0);
        let t = segment_sphere_entry(origin, dir, 5.0, DVec3::new(0.0, 0.1, 0.0), 0.5);
        assert_eq!(t, Some(0.0));
    }

    #[test]
    fn test_segment_sphere_entry_behind_origin() {
        let origin = DVec3::ZERO;
        let dir = DVec3::new(0.0, 1.0, 0.0);
        let t = segment_sphere_entry(origin, dir, 5.0, DVec3::new(0.0, -3.0, 0.0), 0.5);
        assert!(t.is_none());
    }
}
