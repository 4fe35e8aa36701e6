//! Cleanup system: prunes destroyed enemies and exploded interceptors.
//!
//! Installations are never removed; explosions are pruned by their own
//! lifecycle pass.

use hecs::{Entity, World};

use skyguard_core::components::{Enemy, Interceptor};

/// Despawn spent entities. Uses a pre-allocated buffer to avoid per-tick
/// allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, enemy) in world.query_mut::<&Enemy>() {
        if enemy.destroyed {
            despawn_buffer.push(entity);
        }
    }

    for (entity, interceptor) in world.query_mut::<&Interceptor>() {
        if interceptor.exploded {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
