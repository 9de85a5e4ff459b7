//! Game state snapshot: the complete visible state handed to the renderer each frame.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{Position, SimTime};

/// Complete game state published after each frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub economy: EconomyView,
    pub wave: WaveView,
    pub path: PathView,
    pub enemies: Vec<EnemyView>,
    pub towers: Vec<TowerView>,
    pub projectiles: Vec<ProjectileView>,
    pub particles: Vec<ParticleView>,
    pub events: Vec<GameEvent>,
}

/// Wallet, lives and score.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EconomyView {
    pub gold: u32,
    pub lives: u32,
    pub score: u64,
}

/// Wave progression for the HUD.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaveView {
    /// 1-based index of the current wave, 0 before the first.
    pub current: u32,
    pub total: u32,
    pub phase: WavePhase,
    /// Enemies of the current wave not yet spawned.
    pub pending_spawns: u32,
    pub can_start_next: bool,
}

/// Absolute path geometry for drawing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathView {
    pub waypoints: Vec<Position>,
    pub width: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u64,
    pub kind: EnemyKind,
    pub position: Position,
    pub progress: f64,
    pub health: f64,
    pub max_health: f64,
    /// health / max_health, for the health bar.
    pub health_fraction: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TowerView {
    pub id: u64,
    pub kind: TowerKind,
    pub level: u32,
    pub position: Position,
    pub damage: f64,
    pub range: f64,
    pub fire_interval_ms: f64,
    /// Endpoint of the targeting line, if the tower has a live target.
    pub target_position: Option<Position>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub kind: TowerKind,
    pub mode: MovementMode,
    pub position: Position,
    /// Far end of a laser beam while its target is alive.
    pub beam_end: Option<Position>,
    /// 1.0 → 0.0 over a beam's lifetime; always 1.0 for shots in flight.
    pub fade: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleView {
    pub kind: ParticleKind,
    pub position: Position,
    pub color_seed: f64,
    pub fade: f64,
}
