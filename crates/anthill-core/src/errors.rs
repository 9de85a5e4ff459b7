//! Rejection reasons for player intents.
//!
//! A rejected intent never changes simulation state.

use thiserror::Error;

use crate::enums::TowerKind;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlacementError {
    #[error("not enough gold for {kind:?}: costs {cost}, have {gold}")]
    InsufficientFunds { kind: TowerKind, cost: u32, gold: u32 },
    #[error("cannot build on the enemy path")]
    OnPath,
    #[error("too close to an existing tower")]
    Overlapping,
    #[error("the game has not started")]
    NotStarted,
    #[error("the game is over")]
    GameOver,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MergeError {
    #[error("no such tower")]
    UnknownTower,
    #[error("a tower cannot merge with itself")]
    SameTower,
    #[error("towers are of different types ({dragged:?} vs {stationary:?})")]
    TypeMismatch {
        dragged: TowerKind,
        stationary: TowerKind,
    },
    #[error("towers are of different levels ({dragged} vs {stationary})")]
    LevelMismatch { dragged: u32, stationary: u32 },
    #[error("dropped too far from the target tower ({distance:.1} px)")]
    TooFar { distance: f64 },
    #[error("the game is over")]
    GameOver,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WaveError {
    #[error("wave {wave} is still in progress")]
    InProgress { wave: u32 },
    #[error("all waves have been started")]
    NoWavesLeft,
    #[error("the game is not running")]
    NotPlaying,
}
