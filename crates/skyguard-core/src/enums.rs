//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Session phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    NotStarted,
    Active,
    /// Simulation frozen by the operator; resumable.
    Paused,
    Won,
    Lost,
}

impl GamePhase {
    /// Won or lost. Only a new session leaves a terminal phase.
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::Lost)
    }
}

/// What a ground installation is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstallationKind {
    /// Cosmetic target. Carries no ammo.
    City,
    /// Defense emplacement able to fire interceptors.
    Battery,
}

/// Identity of a battery along the ground line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BatterySide {
    Left,
    Middle,
    Right,
}

impl BatterySide {
    pub const ALL: [BatterySide; 3] = [BatterySide::Left, BatterySide::Middle, BatterySide::Right];
}

/// Who produced an explosion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExplosionSource {
    /// An interceptor reached its destination.
    Interceptor,
    /// An enemy reached its target.
    Impact,
}
