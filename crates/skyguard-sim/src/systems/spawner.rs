//! Spawn scheduler: releases one enemy per spawn interval.
//!
//! The interval shrinks and enemy speed grows with the score.

use hecs::World;
use tracing::debug;

use skyguard_core::components::Installation;
use skyguard_core::config::Tuning;
use skyguard_core::events::GameEvent;
use skyguard_core::types::{Position, Viewport};

use crate::rng::RandomSource;
use crate::world_setup;

/// Pacing state carried across ticks.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpawnClock {
    /// Timestamp of the last spawn attempt. `None` until the first tick of a
    /// session, which spawns immediately.
    pub last_spawn_ms: Option<f64>,
}

impl SpawnClock {
    /// Whether an interval has elapsed since the last attempt.
    pub fn is_due(&self, now_ms: f64, interval_ms: f64) -> bool {
        match self.last_spawn_ms {
            Some(last) => now_ms - last >= interval_ms,
            None => true,
        }
    }

    /// Move the clock forward, e.g. to skip time spent paused.
    pub fn shift(&mut self, delta_ms: f64) {
        if let Some(last) = self.last_spawn_ms.as_mut() {
            *last += delta_ms;
        }
    }
}

/// Spawn an enemy if the interval for the current score has elapsed.
///
/// The target is drawn uniformly from the installations still standing.
/// With none standing the attempt is skipped, but the clock still restarts.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    rng: &mut impl RandomSource,
    clock: &mut SpawnClock,
    tuning: &Tuning,
    viewport: Viewport,
    score: u32,
    now_ms: f64,
    events: &mut Vec<GameEvent>,
) {
    if !clock.is_due(now_ms, tuning.spawn_interval_ms(score)) {
        return;
    }
    clock.last_spawn_ms = Some(now_ms);

    let mut targets: Vec<(Installation, Position)> = world
        .query::<(&Installation, &Position)>()
        .iter()
        .filter(|(_, (installation, _))| !installation.destroyed)
        .map(|(_, (installation, pos))| (*installation, *pos))
        .collect();

    if targets.is_empty() {
        debug!(now_ms, "no standing installations, spawn skipped");
        return;
    }
    targets.sort_by_key(|(installation, _)| installation.id);

    let (target, target_pos) = targets[rng.index(targets.len())];
    let x = rng.unit() * viewport.width;
    let speed = tuning.enemy_speed(score);

    world_setup::spawn_enemy(
        world,
        Position::new(x, -tuning.enemy_spawn_height),
        target_pos,
        target.id,
        speed,
    );

    debug!(x, target = target.id.0, speed, "enemy spawned");
    events.push(GameEvent::EnemySpawned {
        x,
        target: target.id,
    });
}
