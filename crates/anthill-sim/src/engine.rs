//! Simulation engine, the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely headless,
//! enabling deterministic testing.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use anthill_core::commands::PlayerCommand;
use anthill_core::constants::*;
use anthill_core::enums::{GamePhase, ParticleKind, TowerKind};
use anthill_core::errors::{MergeError, PlacementError, WaveError};
use anthill_core::events::GameEvent;
use anthill_core::state::GameStateSnapshot;
use anthill_core::stats::tower_cost;
use anthill_core::types::{Position, SimTime};

use crate::economy::Wallet;
use crate::path::PathModel;
use crate::placement;
use crate::systems;
use crate::systems::waves::WaveDirector;
use crate::world_setup::{self, entity_from_id, entity_id};

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub starting_gold: u32,
    pub starting_lives: u32,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            starting_gold: STARTING_GOLD,
            starting_lives: STARTING_LIVES,
            time_scale: 1.0,
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    config: SimConfig,
    world: World,
    time: SimTime,
    phase: GamePhase,
    time_scale: f64,
    rng: ChaCha8Rng,
    path: PathModel,
    waves: WaveDirector,
    wallet: Wallet,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let waves = WaveDirector::new(&mut rng);
        Self::assemble(config, rng, waves)
    }

    /// Create an engine that runs a caller-supplied wave table.
    pub fn with_wave_director(config: SimConfig, waves: WaveDirector) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self::assemble(config, rng, waves)
    }

    fn assemble(config: SimConfig, rng: ChaCha8Rng, waves: WaveDirector) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            time_scale: config.time_scale,
            rng,
            path: PathModel::default_level(config.viewport_width, config.viewport_height),
            waves,
            wallet: Wallet::new(config.starting_gold, config.starting_lives),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            config,
        }
    }

    /// Queue a player command for processing at the next frame boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance one nominal frame (scaled by the time scale).
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.advance_frame(FRAME_DT_MS * self.time_scale)
    }

    /// Apply queued commands, then advance the world by `dt_ms` if the game
    /// is running. Returns the resulting snapshot.
    pub fn advance_frame(&mut self, dt_ms: f64) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Playing {
            let dt_ms = if dt_ms.is_finite() { dt_ms.max(0.0) } else { 0.0 };
            self.run_systems(dt_ms);
            self.time.advance(dt_ms);
        }

        self.snapshot()
    }

    /// Build a snapshot of the current state, handing out pending events.
    pub fn snapshot(&mut self) -> GameStateSnapshot {
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.wallet,
            &self.waves,
            &self.path,
            events,
        )
    }

    // --- Player intents ---

    /// Buy and place a tower. On error nothing changes.
    pub fn place_tower(&mut self, kind: TowerKind, at: Position) -> Result<Entity, PlacementError> {
        self.can_place_tower(kind, at)?;

        self.wallet.spend(tower_cost(kind));
        let entity = world_setup::spawn_tower(&mut self.world, kind, 1, at);
        tracing::debug!(?kind, x = at.x, y = at.y, gold = self.wallet.gold, "tower placed");
        self.events.push(GameEvent::TowerPlaced {
            tower_id: entity_id(entity),
            kind,
            position: at,
        });
        Ok(entity)
    }

    /// Validate a placement without performing it.
    pub fn can_place_tower(&self, kind: TowerKind, at: Position) -> Result<(), PlacementError> {
        match self.phase {
            GamePhase::Menu => return Err(PlacementError::NotStarted),
            GamePhase::Defeat | GamePhase::Victory => return Err(PlacementError::GameOver),
            GamePhase::Playing | GamePhase::Paused => {}
        }
        placement::validate_placement(&self.world, &self.path, &self.wallet, kind, &at)
    }

    /// Merge `dragged` into `stationary`, released at `drop_at`. Both towers
    /// are replaced by one of the next level at the stationary position.
    pub fn merge_towers(
        &mut self,
        dragged: Entity,
        stationary: Entity,
        drop_at: Position,
    ) -> Result<Entity, MergeError> {
        if self.phase.is_over() {
            return Err(MergeError::GameOver);
        }
        let plan = placement::validate_merge(&self.world, dragged, stationary, &drop_at)?;

        let _ = self.world.despawn(dragged);
        let _ = self.world.despawn(stationary);
        let merged = world_setup::spawn_tower(&mut self.world, plan.kind, plan.level, plan.position);
        world_setup::spawn_particle_burst(
            &mut self.world,
            &mut self.rng,
            plan.position,
            ParticleKind::Hit,
            MERGE_PARTICLES,
        );

        tracing::debug!(kind = ?plan.kind, level = plan.level, "towers merged");
        self.events.push(GameEvent::TowerMerged {
            tower_id: entity_id(merged),
            kind: plan.kind,
            level: plan.level,
        });
        Ok(merged)
    }

    /// Tower under a click at `at`, if any.
    pub fn tower_at(&self, at: Position) -> Option<Entity> {
        placement::tower_at(&self.world, &at)
    }

    /// Tower `dragged` would merge into if released at `drop_at`.
    pub fn find_merge_partner(&self, dragged: Entity, drop_at: Position) -> Option<Entity> {
        placement::find_merge_partner(&self.world, dragged, &drop_at)
    }

    /// Leave the menu and start wave 1. Ignored outside the menu.
    pub fn start_game(&mut self) -> Option<u32> {
        if self.phase != GamePhase::Menu {
            return None;
        }
        self.phase = GamePhase::Playing;
        tracing::info!(seed = self.config.seed, "game started");
        self.begin_wave()
    }

    /// Start the next wave once the current one is complete.
    pub fn start_next_wave(&mut self) -> Result<u32, WaveError> {
        if !matches!(self.phase, GamePhase::Playing | GamePhase::Paused) {
            return Err(WaveError::NotPlaying);
        }
        if self.waves.in_progress() {
            return Err(WaveError::InProgress {
                wave: self.waves.current_wave(),
            });
        }
        self.begin_wave().ok_or(WaveError::NoWavesLeft)
    }

    fn begin_wave(&mut self) -> Option<u32> {
        let wave = self.waves.start_wave()?;
        self.events.push(GameEvent::WaveStarted { wave });
        Some(wave)
    }

    pub fn pause(&mut self) {
        if self.phase == GamePhase::Playing {
            self.phase = GamePhase::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.phase == GamePhase::Paused {
            self.phase = GamePhase::Playing;
        }
    }

    /// Back to the menu with a fresh wallet, an empty field, wave 0 and the
    /// RNG back at its seed.
    pub fn restart(&mut self) {
        // A new world rather than `clear`, so entity ids start over too.
        self.world = World::new();
        self.time = SimTime::default();
        self.phase = GamePhase::Menu;
        self.wallet = Wallet::new(self.config.starting_gold, self.config.starting_lives);
        // Reseed so a restarted game replays a fresh one with the same seed.
        self.rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        self.waves.reset(&mut self.rng);
        tracing::info!("game restarted");
    }

    /// Rescale path geometry to a new viewport. Enemy progress is kept.
    pub fn resize(&mut self, width: f64, height: f64) {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            tracing::debug!(width, height, "ignoring degenerate viewport size");
            return;
        }
        self.path.resize(width, height);
        systems::enemies::sync_positions(&mut self.world, &self.path);
    }

    pub fn set_time_scale(&mut self, scale: f64) {
        self.time_scale = scale.clamp(0.0, 4.0);
    }

    // --- Accessors ---

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    pub fn gold(&self) -> u32 {
        self.wallet.gold
    }

    pub fn lives(&self) -> u32 {
        self.wallet.lives
    }

    pub fn score(&self) -> u64 {
        self.wallet.score
    }

    pub fn wallet(&self) -> &Wallet {
        &self.wallet
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn path(&self) -> &PathModel {
        &self.path
    }

    pub fn waves(&self) -> &WaveDirector {
        &self.waves
    }

    /// Mutable world access for tests that stage enemies directly.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command. Refusals become `CommandRejected` events.
    fn handle_command(&mut self, command: PlayerCommand) {
        let rejection = match command {
            PlayerCommand::PlaceTower { kind, x, y } => self
                .place_tower(kind, Position::new(x, y))
                .err()
                .map(|e| e.to_string()),
            PlayerCommand::MergeTowers {
                dragged,
                stationary,
                drop_x,
                drop_y,
            } => {
                let result = match (entity_from_id(dragged), entity_from_id(stationary)) {
                    (Some(dragged), Some(stationary)) => {
                        self.merge_towers(dragged, stationary, Position::new(drop_x, drop_y))
                    }
                    _ => Err(MergeError::UnknownTower),
                };
                result.err().map(|e| e.to_string())
            }
            PlayerCommand::StartGame => {
                self.start_game();
                None
            }
            PlayerCommand::StartNextWave => self.start_next_wave().err().map(|e| e.to_string()),
            PlayerCommand::Pause => {
                self.pause();
                None
            }
            PlayerCommand::Resume => {
                self.resume();
                None
            }
            PlayerCommand::Restart => {
                self.restart();
                None
            }
            PlayerCommand::Resize { width, height } => {
                self.resize(width, height);
                None
            }
        };

        if let Some(reason) = rejection {
            tracing::debug!(%reason, "command rejected");
            self.events.push(GameEvent::CommandRejected { reason });
        }
    }

    /// Run all systems in order. Defeat and victory end the frame early.
    fn run_systems(&mut self, dt_ms: f64) {
        // 1. Waves: spawning and completion bonus
        if let Some(bonus) = self
            .waves
            .update(dt_ms, &mut self.world, &self.path, &mut self.events)
        {
            self.wallet.credit_wave_bonus(bonus);
            if self.waves.all_completed() {
                self.end_game(GamePhase::Victory);
                return;
            }
        }
        // 2. Enemy movement and leaks
        let defeated = systems::enemies::run(
            &mut self.world,
            &self.path,
            dt_ms,
            &mut self.wallet,
            &mut self.events,
        );
        if defeated {
            self.end_game(GamePhase::Defeat);
            return;
        }
        // 3. Kill credit
        systems::bounty::run(&mut self.world, &mut self.wallet, &mut self.events);
        // 4. Remove dead enemies
        systems::cleanup::dead_enemies(&mut self.world, &mut self.despawn_buffer);
        // 5. Towers
        systems::towers::run(&mut self.world, &mut self.rng, dt_ms);
        // 6. Projectiles
        systems::projectiles::run(&mut self.world, &mut self.rng, self.path.viewport(), dt_ms);
        systems::cleanup::dead_projectiles(&mut self.world, &mut self.despawn_buffer);
        // 7. Particles
        systems::particles::run(&mut self.world, dt_ms);
        systems::cleanup::expired_particles(&mut self.world, &mut self.despawn_buffer);
    }

    /// Settle kills still awaiting credit, then finish the game.
    fn end_game(&mut self, outcome: GamePhase) {
        systems::bounty::run(&mut self.world, &mut self.wallet, &mut self.events);
        self.phase = outcome;
        let event = if outcome == GamePhase::Victory {
            GameEvent::Victory
        } else {
            GameEvent::Defeat
        };
        tracing::info!(
            ?outcome,
            wave = self.waves.current_wave(),
            score = self.wallet.score,
            lives = self.wallet.lives,
            "game over"
        );
        self.events.push(event);
    }
}
