//! Wallet, lives and score.
//!
//! Owned by `SimulationEngine`, NOT stored as ECS entities.

use anthill_core::constants::KILL_SCORE_MULTIPLIER;
use anthill_core::state::EconomyView;

/// Running economy state tracked by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wallet {
    pub gold: u32,
    pub lives: u32,
    pub score: u64,
}

impl Wallet {
    pub fn new(gold: u32, lives: u32) -> Self {
        Self {
            gold,
            lives,
            score: 0,
        }
    }

    pub fn can_afford(&self, cost: u32) -> bool {
        self.gold >= cost
    }

    /// Deduct `cost`. Returns false (and leaves the wallet alone) if short.
    pub fn spend(&mut self, cost: u32) -> bool {
        if !self.can_afford(cost) {
            return false;
        }
        self.gold -= cost;
        true
    }

    /// Kill credit: bounty to gold, twice the bounty to score.
    pub fn credit_kill(&mut self, bounty: u32) {
        self.gold = self.gold.saturating_add(bounty);
        self.score += bounty as u64 * KILL_SCORE_MULTIPLIER;
    }

    /// Wave completion bonus: added to both gold and score.
    pub fn credit_wave_bonus(&mut self, bonus: u32) {
        self.gold = self.gold.saturating_add(bonus);
        self.score += bonus as u64;
    }

    /// Remove one life. Returns the lives remaining.
    pub fn lose_life(&mut self) -> u32 {
        self.lives = self.lives.saturating_sub(1);
        self.lives
    }

    pub fn is_out_of_lives(&self) -> bool {
        self.lives == 0
    }

    pub fn view(&self) -> EconomyView {
        EconomyView {
            gold: self.gold,
            lives: self.lives,
            score: self.score,
        }
    }
}
