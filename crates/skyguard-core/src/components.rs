//! ECS components for hecs entities.
//!
//! Components are plain data. Game logic lives in the sim systems.
//! Every entity also carries a `Position`.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Position;

/// Stable identifier of an installation (its index in the session layout).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InstallationId(pub u32);

/// A fixed ground object. Never despawned during a session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Installation {
    pub id: InstallationId,
    pub kind: InstallationKind,
    pub destroyed: bool,
}

/// Launcher state, attached to battery installations only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Battery {
    pub side: BatterySide,
    pub ammo: u32,
}

/// Incoming threat.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    /// Aim point, captured by value when spawned.
    pub target: Position,
    /// Installation that sat at `target` when the enemy was spawned.
    pub target_installation: InstallationId,
    /// Distance covered per tick.
    pub speed: f64,
    /// Within the arrival threshold of `target`. Set by kinematics.
    pub arrived: bool,
    pub destroyed: bool,
}

/// Player-fired projectile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Interceptor {
    pub launch: Position,
    pub destination: Position,
    /// Fraction of the launch-to-destination path covered, in [0, 1].
    pub progress: f64,
    /// Progress added per tick. Infinite for a zero-length path.
    pub step: f64,
    /// Progress reached 1. Set by kinematics.
    pub arrived: bool,
    pub exploded: bool,
}

/// Transient area-of-effect hazard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Explosion {
    pub radius: f64,
    pub max_radius: f64,
    /// Total lifetime in ticks.
    pub duration_ticks: u32,
    /// Ticks left before the explosion is pruned.
    pub remaining_ticks: u32,
    pub source: ExplosionSource,
}

impl Explosion {
    /// A freshly detonated explosion: zero radius, full lifetime.
    pub fn new(max_radius: f64, duration_ticks: u32, source: ExplosionSource) -> Self {
        Self {
            radius: 0.0,
            max_radius,
            duration_ticks,
            remaining_ticks: duration_ticks,
            source,
        }
    }
}
