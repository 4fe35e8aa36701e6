//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::components::InstallationId;
use crate::enums::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A new session was laid out.
    SessionStarted { width: f64, height: f64 },
    /// An enemy entered the playfield.
    EnemySpawned { x: f64, target: InstallationId },
    /// A battery fired a volley.
    InterceptorsLaunched { battery: BatterySide, count: u32 },
    /// An explosion was created.
    Detonation { x: f64, y: f64, source: ExplosionSource },
    /// An installation was hit.
    InstallationDestroyed {
        id: InstallationId,
        kind: InstallationKind,
    },
    /// An enemy was caught in an explosion.
    EnemyKilled { points: u32 },
    Victory { score: u32 },
    Defeat { score: u32 },
}
