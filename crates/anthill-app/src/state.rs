//! State shared between the driver and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use anthill_core::commands::PlayerCommand;
use anthill_core::state::GameStateSnapshot;

/// Messages sent to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    Player(PlayerCommand),
    /// Change the simulation speed (clamped to 0..=4).
    SetTimeScale(f64),
    /// Stop the loop after the current frame.
    Shutdown,
}

/// Handle to a running game loop.
///
/// `command_tx` is `None` until the loop is started and again after shutdown.
pub struct AppState {
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Latest snapshot for polling. Written by the loop after each frame.
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forward a message to the loop. Returns false when no loop is listening.
    pub fn send(&self, command: GameLoopCommand) -> bool {
        let Ok(guard) = self.command_tx.lock() else {
            return false;
        };
        guard
            .as_ref()
            .is_some_and(|tx| tx.send(command).is_ok())
    }

    /// Clone of the most recent snapshot, if any frame has run.
    pub fn snapshot(&self) -> Option<GameStateSnapshot> {
        self.latest_snapshot.lock().ok().and_then(|s| s.clone())
    }
}
