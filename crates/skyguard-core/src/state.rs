//! Game state snapshot: the complete visible state handed to the
//! presentation layer after each tick.

use serde::{Deserialize, Serialize};

use crate::components::InstallationId;
use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{Position, SimTime, Viewport};

/// Complete game state produced by every tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub viewport: Viewport,
    pub score: u32,
    pub installations: Vec<InstallationView>,
    pub batteries: Vec<BatteryView>,
    pub enemies: Vec<EnemyView>,
    pub interceptors: Vec<InterceptorView>,
    pub explosions: Vec<ExplosionView>,
    /// Events emitted since the previous snapshot.
    pub events: Vec<GameEvent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallationView {
    pub id: InstallationId,
    pub kind: InstallationKind,
    pub position: Position,
    pub destroyed: bool,
}

/// Ammo readout for one battery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatteryView {
    pub id: InstallationId,
    pub side: BatterySide,
    pub ammo: u32,
    pub destroyed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub position: Position,
    pub target: Position,
    pub speed: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterceptorView {
    pub launch: Position,
    pub position: Position,
    pub destination: Position,
    pub progress: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplosionView {
    pub position: Position,
    pub radius: f64,
    pub max_radius: f64,
    pub remaining_ticks: u32,
    pub source: ExplosionSource,
}

impl GameStateSnapshot {
    /// Ammo of the battery on the given side, if it exists.
    pub fn ammo(&self, side: BatterySide) -> Option<u32> {
        self.batteries.iter().find(|b| b.side == side).map(|b| b.ammo)
    }
}
