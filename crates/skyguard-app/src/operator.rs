//! A simple automatic operator that plays a session from snapshots.
//!
//! Fires at the lowest enemy not already covered by an inbound volley or a
//! live explosion, at most once per `cadence_ms`.

use skyguard_core::commands::PlayerCommand;
use skyguard_core::config::Tuning;
use skyguard_core::enums::GamePhase;
use skyguard_core::state::GameStateSnapshot;
use skyguard_core::types::Position;

/// Minimum time between two volleys.
pub const DEFAULT_CADENCE_MS: f64 = 500.0;

#[derive(Debug, Clone)]
pub struct AutoOperator {
    cadence_ms: f64,
    cover_radius: f64,
    ground_band: f64,
    last_fire_ms: Option<f64>,
}

impl AutoOperator {
    pub fn new(tuning: &Tuning, cadence_ms: f64) -> Self {
        Self {
            cadence_ms,
            cover_radius: tuning.explosion_max_radius,
            ground_band: tuning.ground_band,
            last_fire_ms: None,
        }
    }

    /// Decide on a command for the given snapshot, if any.
    pub fn decide(&mut self, snapshot: &GameStateSnapshot) -> Option<PlayerCommand> {
        if snapshot.phase != GamePhase::Active {
            return None;
        }
        let now_ms = snapshot.time.now_ms;
        if let Some(last) = self.last_fire_ms {
            if now_ms - last < self.cadence_ms {
                return None;
            }
        }

        let target = self.pick_target(snapshot)?;
        self.last_fire_ms = Some(now_ms);
        Some(PlayerCommand::Fire {
            x: target.x,
            y: target.y,
        })
    }

    fn pick_target(&self, snapshot: &GameStateSnapshot) -> Option<Position> {
        let ground = snapshot.viewport.height - self.ground_band;
        let covered = |pos: Position| {
            snapshot
                .interceptors
                .iter()
                .any(|i| i.destination.distance(pos) < self.cover_radius)
                || snapshot
                    .explosions
                    .iter()
                    .any(|e| e.position.distance(pos) < e.max_radius)
        };

        snapshot
            .enemies
            .iter()
            .map(|e| e.position)
            .filter(|pos| pos.y > 0.0 && pos.y < ground && !covered(*pos))
            .max_by(|a, b| a.y.total_cmp(&b.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyguard_core::state::{EnemyView, InterceptorView};
    use skyguard_core::types::{SimTime, Viewport};

    fn snapshot(now_ms: f64, enemies: &[(f64, f64)]) -> GameStateSnapshot {
        GameStateSnapshot {
            time: SimTime { tick: 1, now_ms },
            phase: GamePhase::Active,
            viewport: Viewport::new(800.0, 600.0),
            enemies: enemies
                .iter()
                .map(|&(x, y)| EnemyView {
                    position: Position::new(x, y),
                    target: Position::new(x, 560.0),
                    speed: 0.5,
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_fires_at_lowest_enemy() {
        let mut operator = AutoOperator::new(&Tuning::default(), DEFAULT_CADENCE_MS);
        let snap = snapshot(0.0, &[(100.0, 50.0), (300.0, 250.0), (500.0, -10.0)]);
        assert_eq!(
            operator.decide(&snap),
            Some(PlayerCommand::Fire { x: 300.0, y: 250.0 })
        );
    }

    #[test]
    fn test_respects_cadence() {
        let mut operator = AutoOperator::new(&Tuning::default(), DEFAULT_CADENCE_MS);
        assert!(operator.decide(&snapshot(0.0, &[(100.0, 50.0)])).is_some());
        assert!(operator.decide(&snapshot(499.0, &[(200.0, 50.0)])).is_none());
        assert!(operator.decide(&snapshot(500.0, &[(200.0, 50.0)])).is_some());
    }

    #[test]
    fn test_skips_covered_and_grounded_enemies() {
        let mut operator = AutoOperator::new(&Tuning::default(), DEFAULT_CADENCE_MS);
        let mut snap = snapshot(0.0, &[(100.0, 100.0), (300.0, 200.0), (600.0, 550.0)]);
        snap.interceptors.push(InterceptorView {
            launch: Position::new(400.0, 560.0),
            position: Position::new(350.0, 400.0),
            destination: Position::new(310.0, 200.0),
            progress: 0.5,
        });

        assert_eq!(
            operator.decide(&snap),
            Some(PlayerCommand::Fire { x: 100.0, y: 100.0 })
        );
    }

    #[test]
    fn test_idle_outside_active_phase() {
        let mut operator = AutoOperator::new(&Tuning::default(), DEFAULT_CADENCE_MS);
        let mut snap = snapshot(0.0, &[(100.0, 100.0)]);
        snap.phase = GamePhase::Paused;
        assert!(operator.decide(&snap).is_none());
    }
}
