//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use anthill_core::components::*;
use anthill_core::enums::*;
use anthill_core::events::GameEvent;
use anthill_core::state::*;
use anthill_core::types::{Position, SimTime};

use crate::economy::Wallet;
use crate::path::PathModel;
use crate::systems::enemies::live_enemy_position;
use crate::systems::waves::WaveDirector;
use crate::world_setup::entity_id;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    wallet: &Wallet,
    waves: &WaveDirector,
    path: &PathModel,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        economy: wallet.view(),
        wave: waves.view(),
        path: PathView {
            waypoints: path.waypoints().to_vec(),
            width: path.width(),
        },
        enemies: build_enemies(world),
        towers: build_towers(world),
        projectiles: build_projectiles(world),
        particles: build_particles(world),
        events,
    }
}

/// Living enemies. Enemies killed this frame are removed next frame and
/// are already left out here.
fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Enemy, &Position)>()
        .iter()
        .filter(|(_, (enemy, _))| enemy.alive)
        .map(|(entity, (enemy, pos))| EnemyView {
            id: entity_id(entity),
            kind: enemy.kind,
            position: *pos,
            progress: enemy.progress,
            health: enemy.health,
            max_health: enemy.max_health,
            health_fraction: enemy.health_fraction(),
        })
        .collect();

    enemies.sort_by_key(|e| e.id);
    enemies
}

fn build_towers(world: &World) -> Vec<TowerView> {
    let mut towers: Vec<TowerView> = world
        .query::<(&Tower, &Position)>()
        .iter()
        .map(|(entity, (tower, pos))| {
            let stats = tower.stats();
            TowerView {
                id: entity_id(entity),
                kind: tower.kind,
                level: tower.level,
                position: *pos,
                damage: stats.damage,
                range: stats.range,
                fire_interval_ms: stats.fire_interval_ms,
                target_position: tower.target.and_then(|t| live_enemy_position(world, t)),
            }
        })
        .collect();

    towers.sort_by_key(|t| t.id);
    towers
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    world
        .query::<(&Projectile, &Position)>()
        .iter()
        .filter(|(_, (projectile, _))| projectile.alive)
        .map(|(_, (projectile, pos))| {
            let (beam_end, fade) = match projectile.motion {
                ProjectileMotion::Beam {
                    target,
                    age_ms,
                    lifetime_ms,
                } => (
                    live_enemy_position(world, target),
                    (1.0 - age_ms / lifetime_ms).clamp(0.0, 1.0),
                ),
                _ => (None, 1.0),
            };
            ProjectileView {
                kind: projectile.kind,
                mode: projectile.motion.mode(),
                position: *pos,
                beam_end,
                fade,
            }
        })
        .collect()
}

fn build_particles(world: &World) -> Vec<ParticleView> {
    world
        .query::<(&Particle, &Position)>()
        .iter()
        .map(|(_, (particle, pos))| ParticleView {
            kind: particle.kind,
            position: *pos,
            color_seed: particle.color_seed,
            fade: particle.fade(),
        })
        .collect()
}
