//! Entity spawn factories for populating the simulation world.
//!
//! Creates enemy, tower, projectile and particle entities with
//! appropriate component bundles.

use glam::DVec2;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use anthill_core::components::*;
use anthill_core::constants::*;
use anthill_core::enums::*;
use anthill_core::stats::enemy_stats;
use anthill_core::types::Position;

use crate::path::PathModel;

/// Spawn an enemy at the start of the path. Max health is the archetype's
/// base scaled by `health_multiplier`, floored.
pub fn spawn_enemy(
    world: &mut World,
    path: &PathModel,
    kind: EnemyKind,
    health_multiplier: f64,
) -> Entity {
    let stats = enemy_stats(kind);
    let max_health = (stats.max_health * health_multiplier).floor();

    let enemy = Enemy {
        kind,
        health: max_health,
        max_health,
        speed: stats.speed,
        bounty: stats.bounty,
        progress: 0.0,
        alive: true,
        reached_end: false,
        bounty_awarded: false,
    };

    world.spawn((enemy, path.position_at_progress(0.0)))
}

/// Spawn a tower with a ready weapon.
pub fn spawn_tower(world: &mut World, kind: TowerKind, level: u32, position: Position) -> Entity {
    world.spawn((Tower::new(kind, level), position))
}

/// Spawn a projectile starting at `origin`.
pub fn spawn_projectile(world: &mut World, origin: Position, projectile: Projectile) -> Entity {
    world.spawn((projectile, origin))
}

/// Spawn `count` cosmetic particles scattering from `at` in random directions.
pub fn spawn_particle_burst(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    at: Position,
    kind: ParticleKind,
    count: usize,
) {
    let (min_speed, spread) = match kind {
        ParticleKind::Hit => HIT_PARTICLE_SPEED,
        ParticleKind::Explosion => EXPLOSION_PARTICLE_SPEED,
    };

    for _ in 0..count {
        let angle: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
        let speed = min_speed + rng.gen::<f64>() * spread;
        let particle = Particle {
            kind,
            velocity: DVec2::from_angle(angle) * speed,
            age_ms: 0.0,
            lifetime_ms: PARTICLE_LIFETIME_MS,
            color_seed: rng.gen::<f64>(),
        };
        world.spawn((particle, at));
    }
}

/// Stable numeric id of an entity, as exposed in views and commands.
pub fn entity_id(entity: Entity) -> u64 {
    entity.to_bits().get()
}

/// Inverse of [`entity_id`]. Ids that never named an entity map to `None`.
pub fn entity_from_id(id: u64) -> Option<Entity> {
    Entity::from_bits(id)
}
