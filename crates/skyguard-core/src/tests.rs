#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::components::{Explosion, InstallationId};
    use crate::config::{ConfigError, Tuning};
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::GameEvent;
    use crate::types::{SimTime, Viewport};

    // ---- Pacing formulas ----

    #[test]
    fn test_spawn_interval_shrinks_with_score() {
        let tuning = Tuning::default();
        assert!((tuning.spawn_interval_ms(0) - 4000.0).abs() < 1e-9);
        assert!((tuning.spawn_interval_ms(100) - 3600.0).abs() < 1e-9);
        assert!((tuning.spawn_interval_ms(500) - 2000.0).abs() < 1e-9);
        // 4000 - 7.5 * 400 = 1000, the floor.
        assert!((tuning.spawn_interval_ms(750) - 1000.0).abs() < 1e-9);
        assert!((tuning.spawn_interval_ms(5000) - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_enemy_speed_grows_without_bound() {
        let tuning = Tuning::default();
        assert!((tuning.enemy_speed(0) - 0.5).abs() < 1e-9);
        assert!((tuning.enemy_speed(500) - 1.0).abs() < 1e-9);
        assert!((tuning.enemy_speed(1000) - 1.5).abs() < 1e-9);
        assert!(tuning.enemy_speed(100_000) > 50.0);
    }

    // ---- Tuning documents ----

    #[test]
    fn test_default_tuning_is_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_overrides_only_named_fields() {
        let tuning = Tuning::from_json_str(r#"{ "win_score": 400, "points_per_kill": 25 }"#).unwrap();
        assert_eq!(tuning.win_score, 400);
        assert_eq!(tuning.points_per_kill, 25);
        assert_eq!(tuning.battery_initial_ammo, BATTERY_INITIAL_AMMO);
        assert_eq!(tuning.volley_offsets, VOLLEY_OFFSETS.to_vec());
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let err = Tuning::from_json_str("{ win_score: ").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let tuning = Tuning {
            interceptor_speed: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigError::NonPositive {
                field: "interceptor_speed",
                ..
            })
        ));

        let tuning = Tuning {
            spawn_interval_min_ms: 5000.0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigError::SpawnIntervalOrder { .. })
        ));

        let tuning = Tuning {
            explosion_duration_ticks: 7,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigError::ExplosionDuration(7))
        ));

        let tuning = Tuning {
            volley_offsets: Vec::new(),
            ..Default::default()
        };
        assert!(matches!(tuning.validate(), Err(ConfigError::Zero { .. })));
    }

    // ---- Types ----

    #[test]
    fn test_viewport_ground_band() {
        let viewport = Viewport::new(800.0, 600.0);
        assert!(viewport.is_valid());
        assert!(!viewport.in_ground_band(539.9, GROUND_BAND));
        assert!(viewport.in_ground_band(540.0, GROUND_BAND));
        assert!(viewport.in_ground_band(599.0, GROUND_BAND));

        assert!(!Viewport::new(0.0, 600.0).is_valid());
        assert!(!Viewport::new(800.0, f64::NAN).is_valid());
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        time.advance(16.0);
        time.advance(33.0);
        assert_eq!(time.tick, 2);
        assert!((time.now_ms - 33.0).abs() < 1e-12);
    }

    #[test]
    fn test_new_explosion_starts_at_zero_radius() {
        let explosion = Explosion::new(50.0, 60, ExplosionSource::Interceptor);
        assert_eq!(explosion.radius, 0.0);
        assert_eq!(explosion.remaining_ticks, 60);
        assert_eq!(explosion.duration_ticks, 60);
    }

    #[test]
    fn test_terminal_phases() {
        assert!(GamePhase::Won.is_terminal());
        assert!(GamePhase::Lost.is_terminal());
        assert!(!GamePhase::Active.is_terminal());
        assert!(!GamePhase::Paused.is_terminal());
        assert!(!GamePhase::NotStarted.is_terminal());
    }

    // ---- Wire shape ----

    /// Commands and events are tagged unions on the `type` field.
    #[test]
    fn test_command_and_event_tagging() {
        let json = serde_json::to_value(PlayerCommand::Fire { x: 10.0, y: 20.0 }).unwrap();
        assert_eq!(json["type"], "Fire");
        assert_eq!(json["x"], 10.0);

        let back: PlayerCommand =
            serde_json::from_str(r#"{ "type": "StartSession", "width": 800.0, "height": 600.0 }"#)
                .unwrap();
        match back {
            PlayerCommand::StartSession { width, height } => {
                assert!((width - 800.0).abs() < 1e-12);
                assert!((height - 600.0).abs() < 1e-12);
            }
            other => panic!("expected StartSession, got {other:?}"),
        }

        let event = GameEvent::InstallationDestroyed {
            id: InstallationId(4),
            kind: InstallationKind::City,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "InstallationDestroyed");
        assert_eq!(json["id"], 4);
        assert_eq!(json["kind"], "City");
    }
}
