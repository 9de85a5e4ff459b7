//! Kill credit: pays each killed enemy's bounty exactly once.

use hecs::World;

use anthill_core::components::Enemy;
use anthill_core::events::GameEvent;

use crate::economy::Wallet;

/// Credit every enemy killed by damage that has not been paid for yet.
/// Leaked enemies are never credited.
pub fn run(world: &mut World, wallet: &mut Wallet, events: &mut Vec<GameEvent>) {
    for (_entity, enemy) in world.query_mut::<&mut Enemy>() {
        if !enemy.is_killed() || enemy.bounty_awarded {
            continue;
        }
        enemy.bounty_awarded = true;
        wallet.credit_kill(enemy.bounty);
        events.push(GameEvent::EnemyKilled {
            kind: enemy.kind,
            bounty: enemy.bounty,
        });
    }
}
