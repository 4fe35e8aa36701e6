//! Kinematics: constant-speed enemy approach and interceptor travel.

use hecs::World;

use skyguard_core::components::{Enemy, Interceptor};
use skyguard_core::types::Position;

/// Advance every live enemy and interceptor by one tick.
pub fn run(world: &mut World, arrival_threshold: f64) {
    advance_enemies(world, arrival_threshold);
    advance_interceptors(world);
}

/// Move enemies straight at their fixed target.
///
/// An enemy closer than the arrival threshold is flagged instead of moved,
/// and no step is longer than the remaining distance, so the distance to
/// target never grows.
pub fn advance_enemies(world: &mut World, arrival_threshold: f64) {
    for (_entity, (pos, enemy)) in world.query_mut::<(&mut Position, &mut Enemy)>() {
        if enemy.destroyed || enemy.arrived {
            continue;
        }

        let to_target = enemy.target - *pos;
        let distance = to_target.length();
        if distance < arrival_threshold {
            enemy.arrived = true;
            continue;
        }

        let step = enemy.speed.min(distance);
        *pos += to_target / distance * step;
    }
}

/// Advance interceptors along their launch-to-destination line.
pub fn advance_interceptors(world: &mut World) {
    for (_entity, (pos, interceptor)) in world.query_mut::<(&mut Position, &mut Interceptor)>() {
        if interceptor.arrived || interceptor.exploded {
            continue;
        }

        interceptor.progress = (interceptor.progress + interceptor.step).min(1.0);
        *pos = interceptor
            .launch
            .lerp(interceptor.destination, interceptor.progress);

        if interceptor.progress >= 1.0 {
            interceptor.arrived = true;
        }
    }
}
