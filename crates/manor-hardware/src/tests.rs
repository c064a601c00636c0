#[cfg(test)]
mod tests {
    use manor_core::constants::DT;
    use manor_core::enums::{SupportVariant, WeaponState, WeaponVariant};
    use manor_core::types::{PointerState, Position};

    use crate::fsm::{FireCommand, WeaponInstance};
    use crate::profiles::weapon_profile;
    use crate::support::SupportInstance;

    const CENTER: Position = Position {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    fn pointer(position: Position, down_position: Position, left_down: bool) -> PointerState {
        PointerState {
            position,
            down_position,
            left_down,
            left_released: false,
        }
    }

    /// The one-sample release edge the pointer tracker produces when
    /// the button goes up.
    fn released(position: Position, down_position: Position) -> PointerState {
        PointerState {
            position,
            down_position,
            left_down: false,
            left_released: true,
        }
    }

    fn make_weapon(variant: WeaponVariant) -> WeaponInstance {
        WeaponInstance::new(variant, CENTER, CENTER)
    }

    /// Press on the capture zone, drag `distance` meters toward -Y
    /// (aiming +Y), release. Returns the release result.
    fn drag_and_release(weapon: &mut WeaponInstance, distance: f64) -> Option<FireCommand> {
        // Press on the weapon.
        weapon.update(&pointer(CENTER, CENTER, true), DT);
        // Drag: pointer pulls away, drag vector = down - current.
        let dragged = Position::new(0.0, -distance, 0.0);
        weapon.update(&pointer(dragged, CENTER, true), DT);
        // Release.
        weapon.update(&released(dragged, CENTER), DT)
    }

    /// Press and release without dragging (a plain click).
    fn click(weapon: &mut WeaponInstance) -> Option<FireCommand> {
        weapon.update(&pointer(CENTER, CENTER, true), DT);
        weapon.update(&released(CENTER, CENTER), DT)
    }

    /// Run idle ticks with the button up and the pointer far away.
    fn idle_ticks(weapon: &mut WeaponInstance, ticks: u32) {
        let far = Position::new(100.0, 100.0, 0.0);
        for _ in 0..ticks {
            weapon.update(&pointer(far, far, false), DT);
        }
    }

    // ---- Crossbow ----

    #[test]
    fn test_crossbow_no_fire_below_min_drag() {
        let mut weapon = make_weapon(WeaponVariant::Crossbow);
        let ammo_before = weapon.ammo();

        let result = drag_and_release(&mut weapon, 0.5);
        assert!(result.is_none(), "sub-threshold drag must not fire");
        assert_eq!(weapon.ammo(), ammo_before, "no ammo consumed");
        assert_eq!(weapon.state(), WeaponState::Idle);
    }

    #[test]
    fn test_crossbow_power_ratio_monotonic_and_bounded() {
        let profile = weapon_profile(WeaponVariant::Crossbow);
        let mut last = -1.0;

        for step in 0..=20 {
            let distance = 0.5 + step as f64 * 0.2; // 0.5 .. 4.5
            let mut weapon = make_weapon(WeaponVariant::Crossbow);
            weapon.update(&pointer(CENTER, CENTER, true), DT);
            weapon.update(
                &pointer(Position::new(0.0, -distance, 0.0), CENTER, true),
                DT,
            );

            let power = weapon.power_ratio();
            assert!((0.0..=1.0).contains(&power));
            assert!(power >= last, "power must not decrease with drag distance");
            if distance <= profile.min_drag_dist {
                assert_eq!(power, 0.0);
            }
            if distance >= profile.max_drag_dist {
                assert_eq!(power, 1.0);
            }
            last = power;
        }
    }

    #[test]
    fn test_crossbow_damage_interpolation() {
        // Mid drag: power 0.5 with min_drag 1, max_drag 3.
        let mut weapon = make_weapon(WeaponVariant::Crossbow);
        let command = drag_and_release(&mut weapon, 2.0).expect("mid drag should fire");

        // floor(1 + (5 - 1) * 0.5) = 3
        assert_eq!(command.damage, 3);

        // Saturated drag: full damage.
        let mut weapon = make_weapon(WeaponVariant::Crossbow);
        let command = drag_and_release(&mut weapon, 5.0).expect("full drag should fire");
        assert_eq!(command.damage, 5);
    }

    #[test]
    fn test_crossbow_target_point_range_mapping() {
        let profile = weapon_profile(WeaponVariant::Crossbow);
        let mut weapon = make_weapon(WeaponVariant::Crossbow);
        let command = drag_and_release(&mut weapon, 2.0).expect("should fire");

        // Power 0.5: range = lerp(min_range, max_range, 0.5), aimed +Y.
        let expected_range = profile.min_range + (profile.max_range - profile.min_range) * 0.5;
        assert!((command.target.y - expected_range).abs() < 1e-9);
        assert!(command.target.x.abs() < 1e-9);
        assert_eq!(command.start, CENTER);
    }

    #[test]
    fn test_crossbow_fire_consumes_ammo_and_reloads() {
        let profile = weapon_profile(WeaponVariant::Crossbow);
        let mut weapon = make_weapon(WeaponVariant::Crossbow);
        assert_eq!(weapon.ammo(), Some(profile.max_ammo));

        drag_and_release(&mut weapon, 3.0).expect("should fire");
        assert_eq!(weapon.ammo(), Some(profile.max_ammo - 1));
        assert_eq!(weapon.state(), WeaponState::Reloading);

        // Cannot fire mid-reload.
        let result = drag_and_release(&mut weapon, 3.0);
        assert!(result.is_none(), "reloading weapon must not fire");

        // Run out the reload; ammo restored to maximum.
        let reload_ticks = (profile.reload_secs / DT).ceil() as u32 + 1;
        idle_ticks(&mut weapon, reload_ticks);
        assert_eq!(weapon.state(), WeaponState::Idle);
        assert_eq!(weapon.ammo(), Some(profile.max_ammo));

        drag_and_release(&mut weapon, 3.0).expect("ready weapon should fire again");
    }

    #[test]
    fn test_reload_ratio_progresses() {
        let mut weapon = make_weapon(WeaponVariant::Crossbow);
        assert_eq!(weapon.reload_ratio(), 0.0);

        drag_and_release(&mut weapon, 3.0).expect("should fire");
        idle_ticks(&mut weapon, 30);
        let halfway = weapon.reload_ratio();
        assert!(halfway > 0.0 && halfway < 1.0);

        idle_ticks(&mut weapon, 30);
        assert!(weapon.reload_ratio() > halfway);
    }

    #[test]
    fn test_ammo_depletion_fails_silently() {
        // One round, no reload: the second attempt must do nothing.
        let mut profile = weapon_profile(WeaponVariant::Crossbow);
        profile.max_ammo = 1;
        profile.reload_secs = 0.0;
        let mut weapon =
            WeaponInstance::with_profile(WeaponVariant::Crossbow, profile, CENTER, CENTER);

        assert!(drag_and_release(&mut weapon, 3.0).is_some());
        assert_eq!(weapon.ammo(), Some(0));

        let result = drag_and_release(&mut weapon, 3.0);
        assert!(result.is_none(), "depleted weapon must fail silently");
        assert_eq!(weapon.ammo(), Some(0), "no ammo consumed when depleted");
    }

    #[test]
    fn test_unlimited_ammo_weapon_always_fires() {
        let mut profile = weapon_profile(WeaponVariant::Crossbow);
        profile.max_ammo = 0;
        profile.reload_secs = 0.0;
        let mut weapon =
            WeaponInstance::with_profile(WeaponVariant::Crossbow, profile, CENTER, CENTER);

        assert_eq!(weapon.ammo(), None);
        for _ in 0..20 {
            assert!(drag_and_release(&mut weapon, 3.0).is_some());
        }
    }

    #[test]
    fn test_pointer_outside_capture_zone_does_not_engage() {
        let mut weapon = make_weapon(WeaponVariant::Crossbow);
        let far = Position::new(10.0, 0.0, 0.0);

        // Press far from the weapon, drag, release.
        weapon.update(&pointer(far, far, true), DT);
        weapon.update(&pointer(Position::new(10.0, -3.0, 0.0), far, true), DT);
        let result = weapon.update(&released(Position::new(10.0, -3.0, 0.0), far), DT);

        assert!(result.is_none());
        assert_eq!(weapon.state(), WeaponState::Idle);
        assert!(!weapon.target_acquired());
    }

    #[test]
    fn test_weapon_fires_only_on_release_edge() {
        let mut weapon = make_weapon(WeaponVariant::Crossbow);
        weapon.update(&pointer(CENTER, CENTER, true), DT);
        let dragged = Position::new(0.0, -3.0, 0.0);
        weapon.update(&pointer(dragged, CENTER, true), DT);

        // Button up without the one-sample release edge: the drag is
        // abandoned, not fired.
        let result = weapon.update(&pointer(dragged, CENTER, false), DT);
        assert!(result.is_none());
        assert_eq!(weapon.state(), WeaponState::Idle);
        assert_eq!(weapon.ammo(), Some(10));
    }

    // ---- Cannon ----

    #[test]
    fn test_cannon_click_fills_charge() {
        let profile = weapon_profile(WeaponVariant::Cannon);
        let mut weapon = make_weapon(WeaponVariant::Cannon);
        assert_eq!(weapon.charge(), 0.0);

        assert!(click(&mut weapon).is_none());
        assert!((weapon.charge() - profile.charge_fill_amount).abs() < 1e-9);

        assert!(click(&mut weapon).is_none());
        assert!((weapon.charge() - 2.0 * profile.charge_fill_amount).abs() < 1e-9);
    }

    #[test]
    fn test_cannon_charge_clamps_at_full_and_depletes_to_zero() {
        let profile = weapon_profile(WeaponVariant::Cannon);
        let mut weapon = make_weapon(WeaponVariant::Cannon);

        // Pump past full; charge clamps at 1.0.
        for _ in 0..7 {
            click(&mut weapon);
        }
        assert_eq!(weapon.charge(), 1.0);

        // Leak: amount per interval, down to exactly zero.
        let interval_ticks = (profile.charge_depletion_interval_secs / DT).ceil() as u32;
        let intervals_to_empty =
            (1.0 / profile.charge_depletion_amount).ceil() as u32;

        // The depletion interval was already running during the pump,
        // so at most one increment has leaked shortly after release.
        idle_ticks(&mut weapon, interval_ticks / 2);
        assert!(weapon.charge() >= 1.0 - profile.charge_depletion_amount - 1e-9);

        idle_ticks(&mut weapon, interval_ticks * (intervals_to_empty + 2));
        assert_eq!(weapon.charge(), 0.0);
    }

    #[test]
    fn test_cannon_below_min_charge_does_not_fire() {
        let mut weapon = make_weapon(WeaponVariant::Cannon);
        click(&mut weapon); // charge 0.2 < min_charge_to_fire 0.5

        let result = drag_and_release(&mut weapon, 3.0);
        assert!(result.is_none(), "insufficient charge must not fire");
        assert!(weapon.charge() > 0.0, "failed fire keeps the charge");
    }

    #[test]
    fn test_cannon_fire_uses_charge_as_power_and_depletes() {
        let profile = weapon_profile(WeaponVariant::Cannon);
        let mut weapon = make_weapon(WeaponVariant::Cannon);
        for _ in 0..3 {
            click(&mut weapon); // charge 0.6
        }
        let charge = weapon.charge();
        assert!(charge > profile.min_charge_to_fire);

        let command = drag_and_release(&mut weapon, 3.0).expect("charged cannon should fire");

        // Damage driven by the charge held at the moment of release.
        let span = (profile.max_damage - profile.min_damage) as f64;
        let expected = (profile.min_damage as f64 + span * charge).floor() as i32;
        assert_eq!(command.damage, expected);

        assert_eq!(weapon.charge(), 0.0, "firing fully depletes the charge");
        assert_eq!(weapon.state(), WeaponState::Reloading);
    }

    #[test]
    fn test_cannon_power_tracks_charge_through_long_hold() {
        let profile = weapon_profile(WeaponVariant::Cannon);
        let mut weapon = make_weapon(WeaponVariant::Cannon);
        for _ in 0..5 {
            click(&mut weapon);
        }
        assert_eq!(weapon.charge(), 1.0);

        // Press on the weapon and keep a full drag held while the
        // charge leaks through three depletion intervals.
        weapon.update(&pointer(CENTER, CENTER, true), DT);
        let dragged = Position::new(0.0, -3.0, 0.0);
        let mut held = 0;
        while weapon.charge() > 0.75 {
            weapon.update(&pointer(dragged, CENTER, true), DT);
            held += 1;
            assert!(held < 200, "charge failed to leak while held");
        }
        let charge = weapon.charge();
        assert!((charge - 0.7).abs() < 1e-9);

        let command = weapon
            .update(&released(dragged, CENTER), DT)
            .expect("charged cannon should fire");

        // The leak lowers the shot: floor(4 + 8 * 0.7) = 9, not the
        // full-power 12 the press started with.
        let span = (profile.max_damage - profile.min_damage) as f64;
        let expected = (profile.min_damage as f64 + span * charge).floor() as i32;
        assert_eq!(command.damage, expected);
        assert_eq!(command.damage, 9);
    }

    #[test]
    fn test_cannon_aim_requires_min_drag() {
        let mut weapon = make_weapon(WeaponVariant::Cannon);
        weapon.update(&pointer(CENTER, CENTER, true), DT);
        weapon.update(&pointer(Position::new(0.0, -0.5, 0.0), CENTER, true), DT);
        assert!(
            !weapon.target_acquired(),
            "cannon must not acquire a target below min drag"
        );

        weapon.update(&pointer(Position::new(0.0, -2.0, 0.0), CENTER, true), DT);
        assert!(weapon.target_acquired());
    }

    #[test]
    fn test_cannon_cancel_operation_dumps_charge() {
        let mut weapon = make_weapon(WeaponVariant::Cannon);
        for _ in 0..4 {
            click(&mut weapon);
        }
        assert!(weapon.charge() > 0.0);

        weapon.cancel_operation();
        assert_eq!(weapon.charge(), 0.0);
        assert_eq!(weapon.state(), WeaponState::Idle);
    }

    // ---- Support ----

    #[test]
    fn test_repair_kit_honors_interval_and_ammo() {
        let mut profile = crate::profiles::support_profile(SupportVariant::RepairKit);
        profile.max_ammo = 2;
        let mut kit = SupportInstance::with_profile(SupportVariant::RepairKit, profile);

        let interval_ticks = (profile.effect_interval_secs / DT).ceil() as u32 + 1;

        // Nothing before the interval elapses.
        for _ in 0..interval_ticks - 2 {
            assert!(!kit.update(true, DT));
        }

        // First use, then the interval restarts.
        let mut used = 0;
        for _ in 0..interval_ticks * 3 {
            if kit.update(true, DT) {
                used += 1;
            }
        }
        assert_eq!(used, 2, "two charges of ammo allow exactly two uses");
        assert_eq!(kit.ammo(), Some(0));

        // Spent kit stays silent.
        for _ in 0..interval_ticks * 2 {
            assert!(!kit.update(true, DT));
        }
    }

    #[test]
    fn test_repair_kit_waits_for_a_target() {
        let profile = crate::profiles::support_profile(SupportVariant::RepairKit);
        let mut kit = SupportInstance::new(SupportVariant::RepairKit);

        let interval_ticks = (profile.effect_interval_secs / DT).ceil() as u32 + 1;

        // Interval elapses with no target: the effect holds ready.
        for _ in 0..interval_ticks * 2 {
            assert!(!kit.update(false, DT));
        }

        // Fires immediately once a target appears.
        assert!(kit.update(true, DT));
    }
}
