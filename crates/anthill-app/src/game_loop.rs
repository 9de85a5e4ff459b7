//! Game loop thread: ticks the engine on a fixed schedule and publishes snapshots.
//!
//! The engine is created inside the thread and never leaves it. Commands
//! arrive over an `mpsc` channel and are applied at the next frame boundary.
//! The latest snapshot is stored in shared state for polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use anyhow::Context;
use serde::Serialize;

use anthill_core::enums::GamePhase;
use anthill_core::events::GameEvent;
use anthill_core::state::GameStateSnapshot;
use anthill_sim::SimulationEngine;

use crate::autopilot::Autopilot;
use crate::config::AppConfig;
use crate::state::GameLoopCommand;

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StopReason {
    GameOver,
    FrameLimit,
    Shutdown,
}

/// Totals gathered from every frame's events.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    pub frames: u64,
    pub elapsed_ms: f64,
    pub phase: GamePhase,
    pub waves_completed: u32,
    pub kills: u32,
    pub leaks: u32,
    pub towers_placed: u32,
    pub merges: u32,
    pub rejected_commands: u32,
    pub gold: u32,
    pub lives: u32,
    pub score: u64,
    pub stop_reason: Option<StopReason>,
}

impl RunSummary {
    /// Fold one frame's snapshot into the totals.
    pub fn record(&mut self, snapshot: &GameStateSnapshot) {
        self.frames = snapshot.time.frame;
        self.elapsed_ms = snapshot.time.elapsed_ms;
        self.phase = snapshot.phase;
        self.gold = snapshot.economy.gold;
        self.lives = snapshot.economy.lives;
        self.score = snapshot.economy.score;

        for event in &snapshot.events {
            match event {
                GameEvent::WaveCompleted { .. } => self.waves_completed += 1,
                GameEvent::EnemyKilled { .. } => self.kills += 1,
                GameEvent::EnemyLeaked { .. } => self.leaks += 1,
                GameEvent::TowerPlaced { .. } => self.towers_placed += 1,
                GameEvent::TowerMerged { .. } => self.merges += 1,
                GameEvent::CommandRejected { .. } => self.rejected_commands += 1,
                _ => {}
            }
        }
    }
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and a handle that yields the run summary.
/// With an autopilot, its commands for each frame are queued in-thread, so
/// a run is reproducible from the seed alone.
pub fn spawn_game_loop(
    config: AppConfig,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    autopilot: Option<Autopilot>,
) -> anyhow::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<RunSummary>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("anthill-game-loop".into())
        .spawn(move || run_game_loop(&config, &cmd_rx, &latest_snapshot, autopilot))
        .context("failed to spawn game loop thread")?;

    Ok((cmd_tx, handle))
}

/// Runs until shutdown, channel disconnect, game over or `max_frames` loop
/// iterations (0 = unlimited).
pub fn run_game_loop(
    config: &AppConfig,
    cmd_rx: &mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
    mut autopilot: Option<Autopilot>,
) -> RunSummary {
    let mut engine = SimulationEngine::new(config.sim.clone());
    let mut summary = RunSummary::default();
    let frame_duration = config.frame_duration();
    let mut next_frame_time = Instant::now();
    let mut frames_run: u64 = 0;

    tracing::info!(
        seed = config.sim.seed,
        frame_rate = config.frame_rate,
        max_frames = config.max_frames,
        "game loop started"
    );

    let reason = loop {
        // 1. Drain pending commands
        if let Some(reason) = drain_commands(&mut engine, cmd_rx) {
            break reason;
        }

        // 2. Advance one frame (the engine ignores time while not playing)
        let snapshot = engine.tick();
        frames_run += 1;
        summary.record(&snapshot);
        if let Some(pilot) = autopilot.as_mut() {
            engine.queue_commands(pilot.decide(&snapshot));
        }

        // 3. Publish for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        if engine.phase().is_over() {
            break StopReason::GameOver;
        }
        if config.max_frames > 0 && frames_run >= config.max_frames {
            break StopReason::FrameLimit;
        }

        // 4. Sleep until the next frame. The time scale already stretches
        // each frame's dt, so wall-clock pacing stays fixed.
        if let Some(duration) = frame_duration {
            pace(&mut next_frame_time, duration);
        }
    };

    summary.stop_reason = Some(reason);
    tracing::info!(?reason, frames = summary.frames, "game loop stopped");
    summary
}

fn drain_commands(
    engine: &mut SimulationEngine,
    cmd_rx: &mpsc::Receiver<GameLoopCommand>,
) -> Option<StopReason> {
    loop {
        match cmd_rx.try_recv() {
            Ok(GameLoopCommand::Player(cmd)) => engine.queue_command(cmd),
            Ok(GameLoopCommand::SetTimeScale(scale)) => engine.set_time_scale(scale),
            Ok(GameLoopCommand::Shutdown) => return Some(StopReason::Shutdown),
            Err(mpsc::TryRecvError::Empty) => return None,
            Err(mpsc::TryRecvError::Disconnected) => return Some(StopReason::Shutdown),
        }
    }
}

fn pace(next_frame_time: &mut Instant, frame_duration: Duration) {
    *next_frame_time += frame_duration;
    let now = Instant::now();
    if *next_frame_time > now {
        std::thread::sleep(*next_frame_time - now);
    } else if now - *next_frame_time > frame_duration * 2 {
        // Too far behind; reset to avoid a catch-up spiral
        *next_frame_time = now;
    }
}
