//! Player commands sent from the frontend to the simulation.
//!
//! Commands are queued and applied at the next frame boundary. Tower ids are
//! the `id` fields of `state::TowerView`.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Towers ---
    /// Buy and place a tower centred at (x, y).
    PlaceTower { kind: TowerKind, x: f64, y: f64 },
    /// Drag `dragged` onto `stationary`, released at (drop_x, drop_y).
    MergeTowers {
        dragged: u64,
        stationary: u64,
        drop_x: f64,
        drop_y: f64,
    },

    // --- Waves ---
    /// Leave the menu and start wave 1.
    StartGame,
    /// Start the next wave once the current one is complete.
    StartNextWave,

    // --- Simulation control ---
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
    /// Reset everything back to the menu.
    Restart,
    /// The viewport changed size; path geometry follows.
    Resize { width: f64, height: f64 },
}
