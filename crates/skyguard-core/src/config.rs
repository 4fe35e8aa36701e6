//! Tunable gameplay parameters.
//!
//! `Tuning` defaults to the values in [`crate::constants`]. A partial JSON
//! document overrides only the fields it names.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;

/// Errors raised while building a tuning.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be positive and finite, got {value}")]
    NonPositive { field: &'static str, value: f64 },
    #[error("minimum spawn interval {min}ms exceeds base interval {base}ms")]
    SpawnIntervalOrder { min: f64, base: f64 },
    #[error("explosion duration must be a non-zero even tick count, got {0}")]
    ExplosionDuration(u32),
    #[error("{field} must be non-zero")]
    Zero { field: &'static str },
    #[error("invalid tuning document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Gameplay numbers consumed by the sim systems.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub spawn_interval_base_ms: f64,
    pub spawn_interval_min_ms: f64,
    pub spawn_interval_step_ms: f64,
    pub spawn_score_step: f64,
    pub enemy_spawn_height: f64,
    pub enemy_base_speed: f64,
    pub enemy_speed_gain: f64,
    pub enemy_speed_score_step: f64,
    pub arrival_threshold: f64,
    pub interceptor_speed: f64,
    pub volley_offsets: Vec<f64>,
    pub ammo_per_volley: u32,
    pub battery_initial_ammo: u32,
    pub explosion_max_radius: f64,
    pub explosion_duration_ticks: u32,
    pub points_per_kill: u32,
    pub win_score: u32,
    pub ground_band: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            spawn_interval_base_ms: SPAWN_INTERVAL_BASE_MS,
            spawn_interval_min_ms: SPAWN_INTERVAL_MIN_MS,
            spawn_interval_step_ms: SPAWN_INTERVAL_STEP_MS,
            spawn_score_step: SPAWN_SCORE_STEP,
            enemy_spawn_height: ENEMY_SPAWN_HEIGHT,
            enemy_base_speed: ENEMY_BASE_SPEED,
            enemy_speed_gain: ENEMY_SPEED_GAIN,
            enemy_speed_score_step: ENEMY_SPEED_SCORE_STEP,
            arrival_threshold: ARRIVAL_THRESHOLD,
            interceptor_speed: INTERCEPTOR_SPEED,
            volley_offsets: VOLLEY_OFFSETS.to_vec(),
            ammo_per_volley: AMMO_PER_VOLLEY,
            battery_initial_ammo: BATTERY_INITIAL_AMMO,
            explosion_max_radius: EXPLOSION_MAX_RADIUS,
            explosion_duration_ticks: EXPLOSION_DURATION_TICKS,
            points_per_kill: POINTS_PER_KILL,
            win_score: WIN_SCORE,
            ground_band: GROUND_BAND,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON tuning document and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check every parameter the systems divide by or pace with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("spawn_interval_base_ms", self.spawn_interval_base_ms),
            ("spawn_interval_min_ms", self.spawn_interval_min_ms),
            ("spawn_score_step", self.spawn_score_step),
            ("enemy_base_speed", self.enemy_base_speed),
            ("enemy_speed_score_step", self.enemy_speed_score_step),
            ("arrival_threshold", self.arrival_threshold),
            ("interceptor_speed", self.interceptor_speed),
            ("explosion_max_radius", self.explosion_max_radius),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        if self.spawn_interval_min_ms > self.spawn_interval_base_ms {
            return Err(ConfigError::SpawnIntervalOrder {
                min: self.spawn_interval_min_ms,
                base: self.spawn_interval_base_ms,
            });
        }

        if self.explosion_duration_ticks == 0 || self.explosion_duration_ticks % 2 != 0 {
            return Err(ConfigError::ExplosionDuration(self.explosion_duration_ticks));
        }

        if self.volley_offsets.is_empty() {
            return Err(ConfigError::Zero {
                field: "volley_offsets",
            });
        }
        if self.points_per_kill == 0 {
            return Err(ConfigError::Zero {
                field: "points_per_kill",
            });
        }

        Ok(())
    }

    /// Milliseconds between spawns at the given score.
    pub fn spawn_interval_ms(&self, score: u32) -> f64 {
        let reduction = (score as f64 / self.spawn_score_step) * self.spawn_interval_step_ms;
        (self.spawn_interval_base_ms - reduction).max(self.spawn_interval_min_ms)
    }

    /// Enemy speed (units per tick) at the given score.
    pub fn enemy_speed(&self, score: u32) -> f64 {
        self.enemy_base_speed + (score as f64 / self.enemy_speed_score_step) * self.enemy_speed_gain
    }
}
