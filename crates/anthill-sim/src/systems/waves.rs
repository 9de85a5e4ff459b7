//! Wave director: composes the wave table, spawns enemies on a timer and
//! detects wave completion.

use hecs::World;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use anthill_core::components::Enemy;
use anthill_core::constants::*;
use anthill_core::enums::{EnemyKind, WavePhase};
use anthill_core::events::GameEvent;
use anthill_core::state::WaveView;
use anthill_core::stats::WAVE_RAMPS;

use crate::path::PathModel;
use crate::world_setup;

/// A single wave definition.
#[derive(Debug, Clone, PartialEq)]
pub struct WavePlan {
    /// Enemies in spawn order.
    pub enemies: Vec<EnemyKind>,
    /// Gold (and score) paid when the wave is cleared.
    pub bonus: u32,
}

/// Build the full wave table: per-kind ramps, bosses on milestone waves and
/// an extra boss on the final wave, each wave shuffled with `rng`.
pub fn generate_composition(rng: &mut ChaCha8Rng) -> Vec<WavePlan> {
    (1..=TOTAL_WAVES)
        .map(|wave| {
            let mut enemies = Vec::new();
            for ramp in &WAVE_RAMPS {
                for _ in 0..ramp.count_for(wave) {
                    enemies.push(ramp.kind);
                }
            }

            if BOSS_WAVES.contains(&wave) {
                enemies.push(EnemyKind::Dragon);
                if wave == TOTAL_WAVES {
                    enemies.push(EnemyKind::Dragon);
                }
            }

            enemies.shuffle(rng);

            WavePlan {
                enemies,
                bonus: WAVE_BONUS_BASE + WAVE_BONUS_PER_WAVE * wave,
            }
        })
        .collect()
}

/// Wave progression state machine. Owned by the engine.
#[derive(Debug, Clone)]
pub struct WaveDirector {
    plans: Vec<WavePlan>,
    /// Table was supplied by the caller; `reset` keeps it instead of rolling a new one.
    fixed_plans: bool,
    /// 1-based, 0 before the first wave.
    current_wave: u32,
    spawned: usize,
    spawn_timer_ms: f64,
    spawn_interval_ms: f64,
    in_progress: bool,
    completed: bool,
    all_completed: bool,
}

impl WaveDirector {
    /// Director with a freshly generated wave table.
    pub fn new(rng: &mut ChaCha8Rng) -> Self {
        Self::from_plans(generate_composition(rng), false)
    }

    /// Director running a caller-supplied wave table.
    pub fn with_waves(plans: Vec<WavePlan>) -> Self {
        Self::from_plans(plans, true)
    }

    fn from_plans(plans: Vec<WavePlan>, fixed_plans: bool) -> Self {
        Self {
            plans,
            fixed_plans,
            current_wave: 0,
            spawned: 0,
            spawn_timer_ms: 0.0,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            in_progress: false,
            completed: false,
            all_completed: false,
        }
    }

    /// Back to wave 0. Generated tables are re-rolled from `rng`.
    pub fn reset(&mut self, rng: &mut ChaCha8Rng) {
        let plans = if self.fixed_plans {
            std::mem::take(&mut self.plans)
        } else {
            generate_composition(rng)
        };
        *self = Self::from_plans(plans, self.fixed_plans);
    }

    /// Begin the next wave. Returns its 1-based number, or `None` if every
    /// wave has already been started (latching `all_completed` once the last
    /// one is done).
    pub fn start_wave(&mut self) -> Option<u32> {
        if self.current_wave >= self.total_waves() {
            if self.completed {
                self.all_completed = true;
            }
            return None;
        }

        self.current_wave += 1;
        self.spawned = 0;
        self.spawn_timer_ms = 0.0;
        self.in_progress = true;
        self.completed = false;

        tracing::info!(
            wave = self.current_wave,
            enemies = self.current_plan().map_or(0, |p| p.enemies.len()),
            "wave started"
        );
        Some(self.current_wave)
    }

    /// Advance spawning by `dt_ms`. Returns the wave bonus on the frame the
    /// wave completes, `None` on every other frame.
    pub fn update(
        &mut self,
        dt_ms: f64,
        world: &mut World,
        path: &PathModel,
        events: &mut Vec<GameEvent>,
    ) -> Option<u32> {
        if !self.in_progress {
            return None;
        }
        let (wave_size, bonus) = self
            .current_plan()
            .map(|plan| (plan.enemies.len(), plan.bonus))?;

        if self.spawned < wave_size {
            self.spawn_timer_ms += dt_ms;
            if self.spawn_timer_ms >= self.spawn_interval_ms {
                let next = self.current_plan().and_then(|p| p.enemies.get(self.spawned));
                if let Some(&kind) = next {
                    world_setup::spawn_enemy(world, path, kind, self.health_multiplier());
                    events.push(GameEvent::EnemySpawned { kind });
                }
                self.spawned += 1;
                self.spawn_timer_ms = 0.0;
            }
        }

        if self.spawned < wave_size {
            return None;
        }

        let field_clear = !world
            .query::<&Enemy>()
            .iter()
            .any(|(_, enemy)| enemy.is_traveling());
        if !field_clear {
            return None;
        }

        self.in_progress = false;
        self.completed = true;
        if self.current_wave >= self.total_waves() {
            self.all_completed = true;
        }

        tracing::info!(wave = self.current_wave, bonus, "wave completed");
        events.push(GameEvent::WaveCompleted {
            wave: self.current_wave,
            bonus,
        });
        Some(bonus)
    }

    /// Health multiplier applied to enemies of the current wave.
    pub fn health_multiplier(&self) -> f64 {
        1.0 + WAVE_HEALTH_GROWTH * self.current_wave.saturating_sub(1) as f64
    }

    pub fn can_start_next_wave(&self) -> bool {
        !self.in_progress && self.current_wave < self.total_waves()
    }

    pub fn current_wave(&self) -> u32 {
        self.current_wave
    }

    pub fn total_waves(&self) -> u32 {
        self.plans.len() as u32
    }

    pub fn in_progress(&self) -> bool {
        self.in_progress
    }

    pub fn is_wave_complete(&self) -> bool {
        self.completed
    }

    pub fn all_completed(&self) -> bool {
        self.all_completed
    }

    pub fn plans(&self) -> &[WavePlan] {
        &self.plans
    }

    /// Enemies of the current wave still waiting to spawn.
    pub fn pending_spawns(&self) -> u32 {
        if !self.in_progress {
            return 0;
        }
        self.current_plan()
            .map_or(0, |p| p.enemies.len().saturating_sub(self.spawned) as u32)
    }

    pub fn phase(&self) -> WavePhase {
        if self.current_wave == 0 {
            WavePhase::Idle
        } else if self.in_progress && self.pending_spawns() > 0 {
            WavePhase::Spawning
        } else if self.in_progress {
            WavePhase::Draining
        } else {
            WavePhase::Completed
        }
    }

    pub fn view(&self) -> WaveView {
        WaveView {
            current: self.current_wave,
            total: self.total_waves(),
            phase: self.phase(),
            pending_spawns: self.pending_spawns(),
            can_start_next: self.can_start_next_wave(),
        }
    }

    fn current_plan(&self) -> Option<&WavePlan> {
        let index = self.current_wave.checked_sub(1)?;
        self.plans.get(index as usize)
    }
}
