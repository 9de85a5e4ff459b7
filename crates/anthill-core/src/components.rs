//! ECS components for hecs entities.
//!
//! Components are plain data. Per-frame behaviour lives in the sim crate's
//! systems; the only methods here are small invariant-keeping helpers.
//! Every entity also carries a `types::Position`.

use glam::DVec2;
use hecs::Entity;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::stats::{tower_stats, TowerStats};

/// An enemy walking the path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub health: f64,
    pub max_health: f64,
    /// Progress units per millisecond.
    pub speed: f64,
    pub bounty: u32,
    /// Fraction of the path covered, in [0, 1].
    pub progress: f64,
    pub alive: bool,
    pub reached_end: bool,
    /// Set once the kill has been credited to the wallet.
    pub bounty_awarded: bool,
}

impl Enemy {
    /// Still on the path and able to take hits or leak.
    pub fn is_traveling(&self) -> bool {
        self.alive && !self.reached_end
    }

    /// Subtract health, clamping at zero. Kills the enemy when health runs out.
    pub fn apply_damage(&mut self, amount: f64) {
        if !self.alive {
            return;
        }
        self.health -= amount;
        if self.health <= 0.0 {
            self.health = 0.0;
            self.alive = false;
        }
    }

    /// Killed by damage (as opposed to leaking out of the path end).
    pub fn is_killed(&self) -> bool {
        !self.alive && self.health <= 0.0
    }

    pub fn health_fraction(&self) -> f64 {
        if self.max_health <= 0.0 {
            return 0.0;
        }
        (self.health / self.max_health).clamp(0.0, 1.0)
    }
}

/// A placed tower. Stats are derived from (kind, level), never stored.
#[derive(Debug, Clone)]
pub struct Tower {
    pub kind: TowerKind,
    pub level: u32,
    /// Enemy currently aimed at. May be stale; always re-checked before use.
    pub target: Option<Entity>,
    /// Milliseconds until the next shot. May go negative.
    pub cooldown_ms: f64,
}

impl Tower {
    pub fn new(kind: TowerKind, level: u32) -> Self {
        Self {
            kind,
            level: level.max(1),
            target: None,
            cooldown_ms: 0.0,
        }
    }

    pub fn stats(&self) -> TowerStats {
        tower_stats(self.kind, self.level)
    }
}

/// How a projectile moves. Fixed for the projectile's whole life.
#[derive(Debug, Clone, Copy)]
pub enum ProjectileMotion {
    /// Chases `target` each frame; dies if the target is gone.
    Homing { target: Entity },
    /// Flies along a velocity fixed at spawn (pixels per ms).
    Ballistic { velocity: DVec2 },
    /// Laser visual from the tower to `target`; damage already applied.
    Beam {
        target: Entity,
        age_ms: f64,
        lifetime_ms: f64,
    },
}

impl ProjectileMotion {
    pub fn mode(&self) -> MovementMode {
        match self {
            ProjectileMotion::Homing { .. } => MovementMode::Homing,
            ProjectileMotion::Ballistic { .. } => MovementMode::Ballistic,
            ProjectileMotion::Beam { .. } => MovementMode::Beam,
        }
    }
}

/// A shot in flight (or a beam visual).
#[derive(Debug, Clone)]
pub struct Projectile {
    pub kind: TowerKind,
    pub damage: f64,
    pub speed: f64,
    /// 0 = single target.
    pub area_radius: f64,
    pub motion: ProjectileMotion,
    pub alive: bool,
}

/// Cosmetic particle. No gameplay effect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub kind: ParticleKind,
    /// Pixels per millisecond.
    pub velocity: DVec2,
    pub age_ms: f64,
    pub lifetime_ms: f64,
    /// Random value in [0, 1) the renderer maps to a colour shade.
    pub color_seed: f64,
}

impl Particle {
    pub fn is_expired(&self) -> bool {
        self.age_ms >= self.lifetime_ms
    }

    /// 1.0 when fresh, 0.0 when expired.
    pub fn fade(&self) -> f64 {
        if self.lifetime_ms <= 0.0 {
            return 0.0;
        }
        (1.0 - self.age_ms / self.lifetime_ms).clamp(0.0, 1.0)
    }
}
