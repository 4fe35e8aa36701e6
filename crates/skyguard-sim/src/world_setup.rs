//! Entity spawn factories for setting up the playfield.
//!
//! Lays out the ground installations for a viewport and creates enemies,
//! interceptors and explosions with their component bundles.

use hecs::{Entity, World};

use skyguard_core::components::*;
use skyguard_core::config::Tuning;
use skyguard_core::constants::*;
use skyguard_core::enums::*;
use skyguard_core::types::{Position, Viewport};

/// Lay out a fresh session: three batteries and six cities along the ground.
///
/// Batteries take ids 0..3 (left, middle, right), cities follow left to right.
pub fn setup_session(world: &mut World, viewport: Viewport, tuning: &Tuning) {
    let ground_y = viewport.height - INSTALLATION_GROUND_OFFSET;
    let mut next_id = 0u32;

    for (side, fraction) in BatterySide::ALL.into_iter().zip(BATTERY_X_FRACTIONS) {
        spawn_battery(
            world,
            InstallationId(next_id),
            side,
            Position::new(viewport.width * fraction, ground_y),
            tuning.battery_initial_ammo,
        );
        next_id += 1;
    }

    for fraction in CITY_X_FRACTIONS {
        spawn_city(
            world,
            InstallationId(next_id),
            Position::new(viewport.width * fraction, ground_y),
        );
        next_id += 1;
    }
}

pub fn spawn_city(world: &mut World, id: InstallationId, position: Position) -> Entity {
    world.spawn((
        position,
        Installation {
            id,
            kind: InstallationKind::City,
            destroyed: false,
        },
    ))
}

pub fn spawn_battery(
    world: &mut World,
    id: InstallationId,
    side: BatterySide,
    position: Position,
    ammo: u32,
) -> Entity {
    world.spawn((
        position,
        Installation {
            id,
            kind: InstallationKind::Battery,
            destroyed: false,
        },
        Battery { side, ammo },
    ))
}

/// Spawn an enemy aimed at an installation's current position.
pub fn spawn_enemy(
    world: &mut World,
    position: Position,
    target: Position,
    target_installation: InstallationId,
    speed: f64,
) -> Entity {
    world.spawn((
        position,
        Enemy {
            target,
            target_installation,
            speed,
            arrived: false,
            destroyed: false,
        },
    ))
}

/// Spawn an interceptor at its launch point.
///
/// The per-tick progress step makes every interceptor cover `speed` units
/// per tick whatever its path length. A zero-length path gets an infinite
/// step and arrives on its first kinematics pass.
pub fn spawn_interceptor(
    world: &mut World,
    launch: Position,
    destination: Position,
    speed: f64,
) -> Entity {
    let distance = launch.distance(destination);
    let step = if distance > 0.0 {
        speed / distance
    } else {
        f64::INFINITY
    };

    world.spawn((
        launch,
        Interceptor {
            launch,
            destination,
            progress: 0.0,
            step,
            arrived: false,
            exploded: false,
        },
    ))
}

pub fn spawn_explosion(
    world: &mut World,
    position: Position,
    source: ExplosionSource,
    tuning: &Tuning,
) -> Entity {
    world.spawn((
        position,
        Explosion::new(
            tuning.explosion_max_radius,
            tuning.explosion_duration_ticks,
            source,
        ),
    ))
}
