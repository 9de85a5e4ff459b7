//! Projectile flight and hit resolution.
//!
//! Each projectile is stepped on its own so that damage dealt by one shot is
//! visible to the next within the same frame.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use anthill_core::components::*;
use anthill_core::constants::*;
use anthill_core::enums::ParticleKind;
use anthill_core::types::Position;

use crate::systems::enemies::live_enemy_position;
use crate::world_setup;

/// Step every projectile by `dt_ms`. Spent projectiles are flagged
/// `alive = false`; removal is left to cleanup.
pub fn run(world: &mut World, rng: &mut ChaCha8Rng, viewport: (f64, f64), dt_ms: f64) {
    let live: Vec<Entity> = world
        .query::<&Projectile>()
        .iter()
        .filter(|(_, p)| p.alive)
        .map(|(entity, _)| entity)
        .collect();

    for entity in live {
        step_projectile(world, rng, viewport, entity, dt_ms);
    }
}

fn step_projectile(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    viewport: (f64, f64),
    entity: Entity,
    dt_ms: f64,
) {
    let (mut projectile, mut pos) = match world.query_one_mut::<(&Projectile, &Position)>(entity) {
        Ok((p, pos)) => (p.clone(), *pos),
        Err(_) => return,
    };

    match projectile.motion {
        ProjectileMotion::Beam {
            target,
            age_ms,
            lifetime_ms,
        } => {
            let age_ms = age_ms + dt_ms;
            projectile.motion = ProjectileMotion::Beam {
                target,
                age_ms,
                lifetime_ms,
            };
            if age_ms >= lifetime_ms {
                projectile.alive = false;
            }
        }
        ProjectileMotion::Homing { target } => match live_enemy_position(world, target) {
            None => projectile.alive = false,
            Some(target_pos) => {
                let distance = pos.distance_to(&target_pos);
                if distance < HOMING_HIT_RADIUS {
                    resolve_hit(world, rng, &projectile, pos, target);
                    projectile.alive = false;
                } else {
                    let step = (projectile.speed * dt_ms).min(distance);
                    let heading = (target_pos.to_vec() - pos.to_vec()) / distance;
                    pos = Position::from(pos.to_vec() + heading * step);
                }
            }
        },
        ProjectileMotion::Ballistic { velocity } => {
            pos = Position::from(pos.to_vec() + velocity * dt_ms);
            if out_of_bounds(&pos, viewport) {
                projectile.alive = false;
            } else if let Some(victim) = first_enemy_near(world, &pos, BALLISTIC_HIT_RADIUS) {
                resolve_hit(world, rng, &projectile, pos, victim);
                projectile.alive = false;
            }
        }
    }

    if let Ok((stored, stored_pos)) = world.query_one_mut::<(&mut Projectile, &mut Position)>(entity) {
        *stored = projectile;
        *stored_pos = pos;
    }
}

/// Apply a projectile's damage at `impact`. Area shots damage every alive
/// enemy within the radius (inclusive); single-target shots damage `target`.
pub fn resolve_hit(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    projectile: &Projectile,
    impact: Position,
    target: Entity,
) {
    if projectile.area_radius > 0.0 {
        for (_entity, (enemy, pos)) in world.query_mut::<(&mut Enemy, &Position)>() {
            if enemy.alive && impact.distance_to(pos) <= projectile.area_radius {
                enemy.apply_damage(projectile.damage);
            }
        }
        world_setup::spawn_particle_burst(
            world,
            rng,
            impact,
            ParticleKind::Explosion,
            AREA_HIT_PARTICLES,
        );
        return;
    }

    let hit_at = match world.query_one_mut::<(&mut Enemy, &Position)>(target) {
        Ok((enemy, pos)) => {
            enemy.apply_damage(projectile.damage);
            *pos
        }
        Err(_) => return,
    };
    world_setup::spawn_particle_burst(world, rng, hit_at, ParticleKind::Hit, SINGLE_HIT_PARTICLES);
}

/// First alive enemy strictly closer than `radius`, in world order.
fn first_enemy_near(world: &World, point: &Position, radius: f64) -> Option<Entity> {
    world
        .query::<(&Enemy, &Position)>()
        .iter()
        .find(|(_, (enemy, pos))| enemy.alive && point.distance_to(pos) < radius)
        .map(|(entity, _)| entity)
}

/// Outside the viewport expanded by the projectile margin.
fn out_of_bounds(pos: &Position, viewport: (f64, f64)) -> bool {
    let (width, height) = viewport;
    pos.x < -PROJECTILE_OOB_MARGIN
        || pos.y < -PROJECTILE_OOB_MARGIN
        || pos.x > width + PROJECTILE_OOB_MARGIN
        || pos.y > height + PROJECTILE_OOB_MARGIN
}
