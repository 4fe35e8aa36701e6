//! Collision & damage resolver for arrivals.
//!
//! Arrived enemies detonate on their target installation; arrived
//! interceptors detonate at their destination. Neither awards points:
//! scoring happens only through explosion overlap (see `explosion`).

use hecs::World;
use tracing::debug;

use skyguard_core::components::{Enemy, Installation, InstallationId, Interceptor};
use skyguard_core::enums::ExplosionSource;
use skyguard_core::events::GameEvent;
use skyguard_core::types::Position;

/// An explosion waiting to join the store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Detonation {
    pub position: Position,
    pub source: ExplosionSource,
}

/// Resolve this tick's arrivals, queueing the resulting detonations.
pub fn run(world: &mut World, detonations: &mut Vec<Detonation>, events: &mut Vec<GameEvent>) {
    resolve_enemy_arrivals(world, detonations, events);
    resolve_interceptor_arrivals(world, detonations);
}

/// Destroy arrived enemies and the installation each was aimed at.
///
/// The installation is matched by the id captured at spawn time. An
/// installation already destroyed (e.g. by an earlier enemy this tick)
/// produces no second explosion.
pub fn resolve_enemy_arrivals(
    world: &mut World,
    detonations: &mut Vec<Detonation>,
    events: &mut Vec<GameEvent>,
) {
    let mut impacts: Vec<(InstallationId, Position)> = Vec::new();

    for (_entity, enemy) in world.query_mut::<&mut Enemy>() {
        if enemy.arrived && !enemy.destroyed {
            enemy.destroyed = true;
            impacts.push((enemy.target_installation, enemy.target));
        }
    }

    for (target_id, target) in impacts {
        let hit = world
            .query_mut::<&mut Installation>()
            .into_iter()
            .map(|(_, installation)| installation)
            .find(|installation| installation.id == target_id && !installation.destroyed);

        let Some(installation) = hit else {
            debug!(target = target_id.0, "impact on a destroyed installation");
            continue;
        };
        installation.destroyed = true;

        debug!(target = target_id.0, kind = ?installation.kind, "installation destroyed");
        events.push(GameEvent::InstallationDestroyed {
            id: installation.id,
            kind: installation.kind,
        });
        detonations.push(Detonation {
            position: target,
            source: ExplosionSource::Impact,
        });
    }
}

/// Mark arrived interceptors exploded and detonate them at their destination.
pub fn resolve_interceptor_arrivals(world: &mut World, detonations: &mut Vec<Detonation>) {
    for (_entity, interceptor) in world.query_mut::<&mut Interceptor>() {
        if interceptor.arrived && !interceptor.exploded {
            interceptor.exploded = true;
            detonations.push(Detonation {
                position: interceptor.destination,
                source: ExplosionSource::Interceptor,
            });
        }
    }
}
