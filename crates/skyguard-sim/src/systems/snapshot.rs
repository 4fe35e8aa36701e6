//! Snapshot system: queries the world and builds a complete GameStateSnapshot.
//!
//! This system is read-only. It never modifies the world.

use hecs::World;

use skyguard_core::components::*;
use skyguard_core::enums::GamePhase;
use skyguard_core::events::GameEvent;
use skyguard_core::state::*;
use skyguard_core::types::{Position, SimTime, Viewport};

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    viewport: Viewport,
    score: u32,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        viewport,
        score,
        installations: build_installations(world),
        batteries: build_batteries(world),
        enemies: build_enemies(world),
        interceptors: build_interceptors(world),
        explosions: build_explosions(world),
        events,
    }
}

fn build_installations(world: &World) -> Vec<InstallationView> {
    let mut views: Vec<InstallationView> = world
        .query::<(&Installation, &Position)>()
        .iter()
        .map(|(_, (installation, pos))| InstallationView {
            id: installation.id,
            kind: installation.kind,
            position: *pos,
            destroyed: installation.destroyed,
        })
        .collect();

    views.sort_by_key(|v| v.id);
    views
}

fn build_batteries(world: &World) -> Vec<BatteryView> {
    let mut views: Vec<BatteryView> = world
        .query::<(&Installation, &Battery)>()
        .iter()
        .map(|(_, (installation, battery))| BatteryView {
            id: installation.id,
            side: battery.side,
            ammo: battery.ammo,
            destroyed: installation.destroyed,
        })
        .collect();

    views.sort_by_key(|v| v.id);
    views
}

/// Live enemies only. Destroyed ones are pruned before snapshots are taken.
fn build_enemies(world: &World) -> Vec<EnemyView> {
    world
        .query::<(&Enemy, &Position)>()
        .iter()
        .filter(|(_, (enemy, _))| !enemy.destroyed)
        .map(|(_, (enemy, pos))| EnemyView {
            position: *pos,
            target: enemy.target,
            speed: enemy.speed,
        })
        .collect()
}

fn build_interceptors(world: &World) -> Vec<InterceptorView> {
    world
        .query::<(&Interceptor, &Position)>()
        .iter()
        .filter(|(_, (interceptor, _))| !interceptor.exploded)
        .map(|(_, (interceptor, pos))| InterceptorView {
            launch: interceptor.launch,
            position: *pos,
            destination: interceptor.destination,
            progress: interceptor.progress,
        })
        .collect()
}

fn build_explosions(world: &World) -> Vec<ExplosionView> {
    world
        .query::<(&Explosion, &Position)>()
        .iter()
        .map(|(_, (explosion, pos))| ExplosionView {
            position: *pos,
            radius: explosion.radius,
            max_radius: explosion.max_radius,
            remaining_ticks: explosion.remaining_ticks,
            source: explosion.source,
        })
        .collect()
}
