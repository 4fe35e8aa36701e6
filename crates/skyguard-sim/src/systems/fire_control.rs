//! Fire control: turns an operator click into a volley of interceptors.

use hecs::{Entity, World};
use tracing::debug;

use skyguard_core::components::{Battery, Installation, InstallationId};
use skyguard_core::config::Tuning;
use skyguard_core::enums::BatterySide;
use skyguard_core::events::GameEvent;
use skyguard_core::types::{Position, Viewport};

use crate::world_setup;

/// Pick the battery that answers a click at `x`.
///
/// Only standing batteries with ammo qualify. The closest by horizontal
/// distance wins; ties go to the lowest installation id.
pub fn select_battery(world: &World, x: f64) -> Option<Entity> {
    let mut candidates: Vec<(Entity, InstallationId, f64)> = world
        .query::<(&Installation, &Battery, &Position)>()
        .iter()
        .filter(|(_, (installation, battery, _))| !installation.destroyed && battery.ammo > 0)
        .map(|(entity, (installation, _, pos))| (entity, installation.id, (pos.x - x).abs()))
        .collect();
    candidates.sort_by_key(|(_, id, _)| *id);

    candidates
        .into_iter()
        .min_by(|a, b| a.2.total_cmp(&b.2))
        .map(|(entity, _, _)| entity)
}

/// Fire a volley toward `target`. Returns whether anything was launched.
///
/// Non-finite targets, clicks inside the ground band, and clicks with no
/// qualifying battery are ignored. Otherwise the chosen battery spends one volley of ammo (floored
/// at zero) and launches one interceptor per volley offset, all from the
/// battery's position.
pub fn fire(
    world: &mut World,
    tuning: &Tuning,
    viewport: Viewport,
    target: Position,
    events: &mut Vec<GameEvent>,
) -> bool {
    if !target.is_finite() {
        debug!(x = target.x, y = target.y, "fire rejected: non-finite target");
        return false;
    }
    if viewport.in_ground_band(target.y, tuning.ground_band) {
        debug!(x = target.x, y = target.y, "fire rejected: inside ground band");
        return false;
    }

    let Some(entity) = select_battery(world, target.x) else {
        debug!(x = target.x, y = target.y, "fire rejected: no battery available");
        return false;
    };

    let (launch, side) = match spend_volley(world, entity, tuning.ammo_per_volley) {
        Some(found) => found,
        None => return false,
    };

    for offset in &tuning.volley_offsets {
        world_setup::spawn_interceptor(
            world,
            launch,
            Position::new(target.x + offset, target.y),
            tuning.interceptor_speed,
        );
    }

    let count = tuning.volley_offsets.len() as u32;
    debug!(?side, x = target.x, y = target.y, count, "volley launched");
    events.push(GameEvent::InterceptorsLaunched {
        battery: side,
        count,
    });
    true
}

/// Deduct one volley from a battery. Returns its position and side.
fn spend_volley(world: &mut World, entity: Entity, cost: u32) -> Option<(Position, BatterySide)> {
    let (battery, pos) = world
        .query_one_mut::<(&mut Battery, &Position)>(entity)
        .ok()?;
    battery.ammo = battery.ammo.saturating_sub(cost);
    Some((*pos, battery.side))
}
