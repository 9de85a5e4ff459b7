//! Events emitted by the simulation for sound and UI feedback.
//!
//! Collected during a frame and handed out with that frame's snapshot.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Position;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    WaveStarted { wave: u32 },
    WaveCompleted { wave: u32, bonus: u32 },
    EnemySpawned { kind: EnemyKind },
    /// Enemy killed and its bounty credited.
    EnemyKilled { kind: EnemyKind, bounty: u32 },
    /// Enemy reached the end of the path.
    EnemyLeaked { kind: EnemyKind, lives_remaining: u32 },
    TowerPlaced {
        tower_id: u64,
        kind: TowerKind,
        position: Position,
    },
    TowerMerged {
        tower_id: u64,
        kind: TowerKind,
        level: u32,
    },
    /// A queued command was refused; `reason` is human readable.
    CommandRejected { reason: String },
    Defeat,
    Victory,
}
