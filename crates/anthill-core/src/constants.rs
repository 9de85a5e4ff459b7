//! Simulation constants and tuning parameters.
//!
//! Distances are in viewport pixels, times in milliseconds, speeds in
//! pixels per millisecond unless noted otherwise.

/// Nominal frame rate of the display-synchronised loop (Hz).
pub const FRAME_RATE: u32 = 60;

/// Milliseconds per frame at the nominal frame rate.
pub const FRAME_DT_MS: f64 = 1000.0 / FRAME_RATE as f64;

// --- Viewport ---

/// Default viewport width.
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 1280.0;

/// Default viewport height.
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 720.0;

// --- Path ---

/// Width of the enemy path; towers may not be placed within half of it.
pub const PATH_WIDTH: f64 = 60.0;

/// Path waypoints as fractions of the viewport size.
pub const PATH_WAYPOINTS: [(f64, f64); 14] = [
    (0.0, 0.5),
    (0.15, 0.5),
    (0.15, 0.15),
    (0.35, 0.15),
    (0.35, 0.45),
    (0.2, 0.45),
    (0.2, 0.75),
    (0.5, 0.75),
    (0.5, 0.3),
    (0.7, 0.3),
    (0.7, 0.6),
    (0.85, 0.6),
    (0.85, 0.2),
    (1.0, 0.2),
];

// --- Economy ---

/// Currency at the start of a game.
pub const STARTING_GOLD: u32 = 200;

/// Lives at the start of a game.
pub const STARTING_LIVES: u32 = 20;

/// Score awarded per kill, as a multiple of the enemy bounty.
pub const KILL_SCORE_MULTIPLIER: u64 = 2;

// --- Placement ---

/// Minimum distance between two tower centres.
pub const TOWER_MIN_SPACING: f64 = 40.0;

/// Radius around a tower centre that counts as clicking on it.
pub const TOWER_CLICK_RADIUS: f64 = 30.0;

/// Maximum distance from the drop point to a merge partner.
pub const MERGE_RADIUS: f64 = 35.0;

// --- Waves ---

/// Number of waves in a game.
pub const TOTAL_WAVES: u32 = 10;

/// Delay between consecutive enemy spawns within a wave.
pub const SPAWN_INTERVAL_MS: f64 = 1000.0;

/// Per-wave health growth above wave 1 (0.2 = +20% per wave).
pub const WAVE_HEALTH_GROWTH: f64 = 0.2;

/// Wave completion bonus = BASE + PER_WAVE × wave.
pub const WAVE_BONUS_BASE: u32 = 10;
pub const WAVE_BONUS_PER_WAVE: u32 = 5;

/// Waves that add a boss.
pub const BOSS_WAVES: [u32; 2] = [5, 10];

// --- Projectiles ---

/// Homing projectiles resolve once this close to their target.
pub const HOMING_HIT_RADIUS: f64 = 5.0;

/// Ballistic projectiles hit any enemy this close.
pub const BALLISTIC_HIT_RADIUS: f64 = 15.0;

/// Ballistic projectiles die this far outside the viewport.
pub const PROJECTILE_OOB_MARGIN: f64 = 100.0;

/// Visual lifetime of a laser beam.
pub const BEAM_LIFETIME_MS: f64 = 100.0;

// --- Particles ---

pub const PARTICLE_LIFETIME_MS: f64 = 500.0;

/// Speed range of hit sparks (min, spread).
pub const HIT_PARTICLE_SPEED: (f64, f64) = (0.1, 0.1);

/// Speed range of explosion debris (min, spread).
pub const EXPLOSION_PARTICLE_SPEED: (f64, f64) = (0.2, 0.2);

pub const BEAM_HIT_PARTICLES: usize = 3;
pub const SINGLE_HIT_PARTICLES: usize = 5;
pub const AREA_HIT_PARTICLES: usize = 12;
pub const MERGE_PARTICLES: usize = 20;
