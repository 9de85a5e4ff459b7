//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Enemy archetype. Stats live in `stats::enemy_stats`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Fast, fragile, cheap.
    Ant,
    /// Slow and sturdier.
    Caterpillar,
    /// Mid-game bruiser, appears from wave 3.
    Scorpion,
    /// Boss, only at milestone waves.
    Dragon,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 4] = [
        EnemyKind::Ant,
        EnemyKind::Caterpillar,
        EnemyKind::Scorpion,
        EnemyKind::Dragon,
    ];
}

/// Tower type available for placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TowerKind {
    /// Ballistic single-target shots, grows in damage and range.
    Archer,
    /// Rapid ballistic shots, grows in fire rate.
    Machinegun,
    /// Homing area-damage shells, grows in damage and blast radius.
    Bomb,
    /// Instant-hit beam, grows in damage, range and fire rate.
    Laser,
}

impl TowerKind {
    pub const ALL: [TowerKind; 4] = [
        TowerKind::Archer,
        TowerKind::Machinegun,
        TowerKind::Bomb,
        TowerKind::Laser,
    ];

    /// How projectiles fired by this tower move.
    pub fn movement_mode(self) -> MovementMode {
        match self {
            TowerKind::Archer | TowerKind::Machinegun => MovementMode::Ballistic,
            TowerKind::Bomb => MovementMode::Homing,
            TowerKind::Laser => MovementMode::Beam,
        }
    }
}

/// Projectile movement mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MovementMode {
    /// Re-aims at the live target every frame.
    Homing,
    /// Fixed velocity set once at spawn.
    Ballistic,
    /// Instant-hit visual; damage was dealt when fired.
    Beam,
}

/// Cosmetic particle flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleKind {
    /// Small blue sparks on single-target hits and merges.
    Hit,
    /// Orange debris on area hits.
    Explosion,
}

/// Wave lifecycle phase for the current wave.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WavePhase {
    /// No wave started yet.
    #[default]
    Idle,
    /// Enemies still being spawned.
    Spawning,
    /// All spawned, waiting for the field to clear.
    Draining,
    /// Wave finished, bonus paid.
    Completed,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Menu,
    Playing,
    Paused,
    Defeat,
    Victory,
}

impl GamePhase {
    /// Whether the game has reached an end condition.
    pub fn is_over(self) -> bool {
        matches!(self, GamePhase::Defeat | GamePhase::Victory)
    }
}
