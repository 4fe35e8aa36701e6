//! Explosion lifecycle: triangular radius profile, enemy overlap, pruning.

use hecs::{Entity, World};
use tracing::debug;

use skyguard_core::components::{Enemy, Explosion};
use skyguard_core::config::Tuning;
use skyguard_core::events::GameEvent;
use skyguard_core::types::Position;

use crate::systems::collision::Detonation;
use crate::world_setup;

/// Radius of an explosion with `remaining` of `duration` ticks left.
///
/// Rises linearly from 0 to `max_radius` over the first half of the
/// lifetime and falls back to 0 over the second half.
pub fn radius_at(max_radius: f64, duration: u32, remaining: u32) -> f64 {
    if duration == 0 {
        return 0.0;
    }
    let elapsed = (duration - remaining.min(duration)) as f64;
    let half = duration as f64 / 2.0;

    if elapsed <= half {
        max_radius * elapsed / half
    } else {
        max_radius * (duration as f64 - elapsed) / half
    }
}

/// Run one lifecycle pass.
///
/// 1. Age every live explosion and recompute its radius.
/// 2. Destroy every live enemy strictly inside any current radius, scoring
///    each enemy once even when several explosions cover it.
/// 3. Prune expired explosions.
/// 4. Add this tick's detonations at zero radius.
pub fn run(
    world: &mut World,
    detonations: &mut Vec<Detonation>,
    tuning: &Tuning,
    score: &mut u32,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();

    let mut blasts: Vec<(Position, f64)> = Vec::new();
    for (entity, (pos, explosion)) in world.query_mut::<(&Position, &mut Explosion)>() {
        explosion.remaining_ticks = explosion.remaining_ticks.saturating_sub(1);
        explosion.radius = radius_at(
            explosion.max_radius,
            explosion.duration_ticks,
            explosion.remaining_ticks,
        );
        blasts.push((*pos, explosion.radius));

        if explosion.remaining_ticks == 0 {
            despawn_buffer.push(entity);
        }
    }

    if !blasts.is_empty() {
        apply_blasts(world, &blasts, tuning.points_per_kill, score, events);
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    for detonation in detonations.drain(..) {
        world_setup::spawn_explosion(world, detonation.position, detonation.source, tuning);
        events.push(GameEvent::Detonation {
            x: detonation.position.x,
            y: detonation.position.y,
            source: detonation.source,
        });
    }
}

/// Destroy and score every live enemy inside one of the given blasts.
pub fn apply_blasts(
    world: &mut World,
    blasts: &[(Position, f64)],
    points_per_kill: u32,
    score: &mut u32,
    events: &mut Vec<GameEvent>,
) {
    for (_entity, (pos, enemy)) in world.query_mut::<(&Position, &mut Enemy)>() {
        if enemy.destroyed {
            continue;
        }
        let caught = blasts
            .iter()
            .any(|(center, radius)| pos.distance(*center) < *radius);
        if caught {
            enemy.destroyed = true;
            *score = score.saturating_add(points_per_kill);
            debug!(x = pos.x, y = pos.y, score = *score, "enemy killed");
            events.push(GameEvent::EnemyKilled {
                points: points_per_kill,
            });
        }
    }
}
