//! Outcome evaluator: victory by score, defeat by losing every battery.

use hecs::World;

use skyguard_core::components::{Battery, Installation};
use skyguard_core::enums::GamePhase;

/// Number of batteries still standing.
pub fn standing_batteries(world: &World) -> usize {
    world
        .query::<(&Installation, &Battery)>()
        .iter()
        .filter(|(_, (installation, _))| !installation.destroyed)
        .count()
}

/// Terminal phase reached this tick, if any. Victory is checked first.
pub fn evaluate(world: &World, score: u32, win_score: u32) -> Option<GamePhase> {
    if score >= win_score {
        Some(GamePhase::Won)
    } else if standing_batteries(world) == 0 {
        Some(GamePhase::Lost)
    } else {
        None
    }
}
