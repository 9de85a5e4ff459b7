//! Cleanup system: removes dead enemies, spent projectiles and faded particles.

use hecs::{Entity, World};

use anthill_core::components::{Enemy, Particle, Projectile};

/// Remove enemies that are no longer alive (killed or leaked).
/// Uses a pre-allocated buffer to avoid per-frame allocation.
pub fn dead_enemies(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();
    for (entity, enemy) in world.query_mut::<&Enemy>() {
        if !enemy.alive {
            despawn_buffer.push(entity);
        }
    }
    despawn_all(world, despawn_buffer);
}

/// Remove projectiles that hit, missed or expired.
pub fn dead_projectiles(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();
    for (entity, projectile) in world.query_mut::<&Projectile>() {
        if !projectile.alive {
            despawn_buffer.push(entity);
        }
    }
    despawn_all(world, despawn_buffer);
}

/// Remove particles past their lifetime.
pub fn expired_particles(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();
    for (entity, particle) in world.query_mut::<&Particle>() {
        if particle.is_expired() {
            despawn_buffer.push(entity);
        }
    }
    despawn_all(world, despawn_buffer);
}

fn despawn_all(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
