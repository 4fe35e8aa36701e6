//! Player and lifecycle commands sent to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All possible operator actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Lay out a fresh playfield and start a new session.
    StartSession { width: f64, height: f64 },
    /// Fire a volley toward a playfield coordinate.
    Fire { x: f64, y: f64 },
    /// Freeze the simulation.
    Pause,
    /// Unfreeze the simulation.
    Resume,
}
