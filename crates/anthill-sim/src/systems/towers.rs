//! Tower control: cooldown, target selection and firing.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use anthill_core::components::*;
use anthill_core::constants::*;
use anthill_core::enums::*;
use anthill_core::stats::TowerStats;
use anthill_core::types::Position;

use crate::world_setup;

/// Run every tower once, in world order. Towers see the enemy state left
/// by the towers before them (a laser kill is visible to the next tower).
pub fn run(world: &mut World, rng: &mut ChaCha8Rng, dt_ms: f64) {
    let towers: Vec<(Entity, Position)> = world
        .query::<(&Tower, &Position)>()
        .iter()
        .map(|(entity, (_, pos))| (entity, *pos))
        .collect();

    for (entity, origin) in towers {
        update_tower(world, rng, entity, origin, dt_ms);
    }
}

fn update_tower(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    entity: Entity,
    origin: Position,
    dt_ms: f64,
) {
    let mut tower = match world.get::<&Tower>(entity) {
        Ok(t) => (*t).clone(),
        Err(_) => return,
    };
    let stats = tower.stats();

    if tower.cooldown_ms > 0.0 {
        tower.cooldown_ms -= dt_ms;
    }

    let target = select_target(world, &origin, stats.range);
    tower.target = target.map(|(e, _)| e);

    if let Some((target_entity, target_pos)) = target {
        if tower.cooldown_ms <= 0.0 {
            fire(
                world,
                rng,
                tower.kind,
                &stats,
                origin,
                target_entity,
                target_pos,
            );
            tower.cooldown_ms = stats.fire_interval_ms;
        }
    }

    if let Ok(mut stored) = world.get::<&mut Tower>(entity) {
        *stored = tower;
    }
}

/// Pick the travelling enemy within `range` (inclusive) that is furthest
/// along the path. Ties keep the first enemy found.
pub fn select_target(world: &World, origin: &Position, range: f64) -> Option<(Entity, Position)> {
    let mut best: Option<(Entity, Position)> = None;
    let mut max_progress = f64::NEG_INFINITY;

    for (entity, (enemy, pos)) in world.query::<(&Enemy, &Position)>().iter() {
        if !enemy.is_traveling() {
            continue;
        }
        if origin.distance_to(pos) <= range && enemy.progress > max_progress {
            max_progress = enemy.progress;
            best = Some((entity, *pos));
        }
    }

    best
}

fn fire(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    kind: TowerKind,
    stats: &TowerStats,
    origin: Position,
    target: Entity,
    target_pos: Position,
) {
    let motion = match kind.movement_mode() {
        MovementMode::Beam => {
            // Instant hit; the beam entity is only a visual.
            if let Ok(mut enemy) = world.get::<&mut Enemy>(target) {
                enemy.apply_damage(stats.damage);
            }
            world_setup::spawn_particle_burst(
                world,
                rng,
                target_pos,
                ParticleKind::Hit,
                BEAM_HIT_PARTICLES,
            );
            ProjectileMotion::Beam {
                target,
                age_ms: 0.0,
                lifetime_ms: BEAM_LIFETIME_MS,
            }
        }
        MovementMode::Homing => ProjectileMotion::Homing { target },
        MovementMode::Ballistic => {
            let heading = (target_pos.to_vec() - origin.to_vec()).normalize_or_zero();
            ProjectileMotion::Ballistic {
                velocity: heading * stats.projectile_speed,
            }
        }
    };

    let projectile = Projectile {
        kind,
        damage: stats.damage,
        speed: stats.projectile_speed,
        area_radius: stats.area_radius,
        motion,
        alive: true,
    };
    world_setup::spawn_projectile(world, origin, projectile);
}
