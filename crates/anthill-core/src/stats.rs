//! Static tuning tables: enemy stats, tower base stats and growth curves,
//! and wave composition ramps.
//!
//! Everything here is plain data plus pure lookups so the tuning surface
//! can be tested in isolation from the engine.

use serde::{Deserialize, Serialize};

use crate::enums::{EnemyKind, TowerKind};

/// Base stats of an enemy archetype (before wave scaling).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyStats {
    pub max_health: f64,
    /// Progress units per millisecond (1.0 = whole path).
    pub speed: f64,
    /// Currency awarded on death.
    pub bounty: u32,
}

const ANT: EnemyStats = EnemyStats {
    max_health: 20.0,
    speed: 0.000075,
    bounty: 3,
};

const CATERPILLAR: EnemyStats = EnemyStats {
    max_health: 50.0,
    speed: 0.000045,
    bounty: 6,
};

const SCORPION: EnemyStats = EnemyStats {
    max_health: 80.0,
    speed: 0.00006,
    bounty: 10,
};

const DRAGON: EnemyStats = EnemyStats {
    max_health: 250.0,
    speed: 0.000036,
    bounty: 30,
};

pub fn enemy_stats(kind: EnemyKind) -> &'static EnemyStats {
    match kind {
        EnemyKind::Ant => &ANT,
        EnemyKind::Caterpillar => &CATERPILLAR,
        EnemyKind::Scorpion => &SCORPION,
        EnemyKind::Dragon => &DRAGON,
    }
}

/// Level-1 stats of a tower type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TowerBaseStats {
    pub cost: u32,
    pub damage: f64,
    pub range: f64,
    pub fire_interval_ms: f64,
    /// Pixels per millisecond. Unused by instant-hit towers.
    pub projectile_speed: f64,
    pub area_radius: f64,
}

/// Fractional growth per level above 1. `fire_rate` divides the interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TowerGrowth {
    pub damage: f64,
    pub range: f64,
    pub fire_rate: f64,
    pub area: f64,
}

/// Per-kind tuning row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TowerProfile {
    pub base: TowerBaseStats,
    pub growth: TowerGrowth,
}

const ARCHER: TowerProfile = TowerProfile {
    base: TowerBaseStats {
        cost: 50,
        damage: 10.0,
        range: 150.0,
        fire_interval_ms: 1000.0,
        projectile_speed: 0.3,
        area_radius: 0.0,
    },
    growth: TowerGrowth {
        damage: 0.2,
        range: 0.15,
        fire_rate: 0.0,
        area: 0.0,
    },
};

const MACHINEGUN: TowerProfile = TowerProfile {
    base: TowerBaseStats {
        cost: 100,
        damage: 5.0,
        range: 100.0,
        fire_interval_ms: 300.0,
        projectile_speed: 0.5,
        area_radius: 0.0,
    },
    growth: TowerGrowth {
        damage: 0.15,
        range: 0.0,
        fire_rate: 0.25,
        area: 0.0,
    },
};

const BOMB: TowerProfile = TowerProfile {
    base: TowerBaseStats {
        cost: 150,
        damage: 30.0,
        range: 140.0,
        fire_interval_ms: 2000.0,
        projectile_speed: 0.2,
        area_radius: 50.0,
    },
    growth: TowerGrowth {
        damage: 0.3,
        range: 0.0,
        fire_rate: 0.0,
        area: 0.1,
    },
};

const LASER: TowerProfile = TowerProfile {
    base: TowerBaseStats {
        cost: 200,
        damage: 50.0,
        range: 200.0,
        fire_interval_ms: 1500.0,
        projectile_speed: 0.8,
        area_radius: 0.0,
    },
    growth: TowerGrowth {
        damage: 0.25,
        range: 0.1,
        fire_rate: 0.15,
        area: 0.0,
    },
};

pub fn tower_profile(kind: TowerKind) -> &'static TowerProfile {
    match kind {
        TowerKind::Archer => &ARCHER,
        TowerKind::Machinegun => &MACHINEGUN,
        TowerKind::Bomb => &BOMB,
        TowerKind::Laser => &LASER,
    }
}

/// Placement cost of a tower type.
pub fn tower_cost(kind: TowerKind) -> u32 {
    tower_profile(kind).base.cost
}

/// Effective stats of a tower at a given level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TowerStats {
    pub damage: f64,
    pub range: f64,
    pub fire_interval_ms: f64,
    pub projectile_speed: f64,
    pub area_radius: f64,
}

/// Derive tower stats from (kind, level). Level 0 is treated as level 1.
pub fn tower_stats(kind: TowerKind, level: u32) -> TowerStats {
    let TowerProfile { base, growth } = tower_profile(kind);
    let bonus = level.saturating_sub(1) as f64;

    TowerStats {
        damage: (base.damage * (1.0 + bonus * growth.damage)).floor(),
        range: (base.range * (1.0 + bonus * growth.range)).floor(),
        fire_interval_ms: (base.fire_interval_ms / (1.0 + bonus * growth.fire_rate)).floor(),
        projectile_speed: base.projectile_speed,
        area_radius: (base.area_radius * (1.0 + bonus * growth.area)).floor(),
    }
}

/// How many of one enemy kind a wave contains: `floor(base + per_wave × wave)`
/// from `first_wave` onward, zero before.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveRamp {
    pub kind: EnemyKind,
    pub base: f64,
    pub per_wave: f64,
    pub first_wave: u32,
}

pub const WAVE_RAMPS: [WaveRamp; 3] = [
    WaveRamp {
        kind: EnemyKind::Ant,
        base: 3.0,
        per_wave: 1.5,
        first_wave: 1,
    },
    WaveRamp {
        kind: EnemyKind::Caterpillar,
        base: 1.0,
        per_wave: 0.8,
        first_wave: 1,
    },
    WaveRamp {
        kind: EnemyKind::Scorpion,
        base: 1.0,
        per_wave: 0.5,
        first_wave: 3,
    },
];

impl WaveRamp {
    pub fn count_for(&self, wave: u32) -> u32 {
        if wave < self.first_wave {
            return 0;
        }
        (self.base + self.per_wave * wave as f64).floor() as u32
    }
}
