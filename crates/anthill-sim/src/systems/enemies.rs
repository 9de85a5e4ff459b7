//! Enemy movement along the path and leak handling.

use hecs::{Entity, World};

use anthill_core::components::Enemy;
use anthill_core::events::GameEvent;
use anthill_core::types::Position;

use crate::economy::Wallet;
use crate::path::PathModel;

/// Advance every travelling enemy by `speed × dt`. An enemy reaching the
/// end while alive costs one life and is marked inert.
///
/// Returns `true` if the player ran out of lives; the remaining enemies
/// are left untouched in that case.
pub fn run(
    world: &mut World,
    path: &PathModel,
    dt_ms: f64,
    wallet: &mut Wallet,
    events: &mut Vec<GameEvent>,
) -> bool {
    for (_entity, (enemy, pos)) in world.query_mut::<(&mut Enemy, &mut Position)>() {
        if !enemy.is_traveling() {
            continue;
        }

        enemy.progress += enemy.speed * dt_ms;
        if enemy.progress >= 1.0 {
            enemy.progress = 1.0;
            enemy.reached_end = true;
        }
        *pos = path.position_at_progress(enemy.progress);

        if enemy.reached_end && enemy.alive {
            enemy.alive = false;
            let lives_remaining = wallet.lose_life();
            tracing::debug!(kind = ?enemy.kind, lives_remaining, "enemy leaked");
            events.push(GameEvent::EnemyLeaked {
                kind: enemy.kind,
                lives_remaining,
            });

            if wallet.is_out_of_lives() {
                return true;
            }
        }
    }

    false
}

/// Snap every enemy to its progress point, e.g. after the path was resized.
pub fn sync_positions(world: &mut World, path: &PathModel) {
    for (_entity, (enemy, pos)) in world.query_mut::<(&Enemy, &mut Position)>() {
        *pos = path.position_at_progress(enemy.progress);
    }
}

/// Position of `target` if it still exists and is alive.
pub fn live_enemy_position(world: &World, target: Entity) -> Option<Position> {
    let mut query = world.query_one::<(&Enemy, &Position)>(target).ok()?;
    let (enemy, pos) = query.get()?;
    enemy.alive.then_some(*pos)
}
