//! Runtime configuration read from the environment (and `.env` when present).
//!
//! Unset or unparsable variables fall back to their defaults.

use std::env;
use std::time::Duration;

use anthill_core::constants::FRAME_RATE;
use anthill_sim::SimConfig;

pub const SEED_VAR: &str = "ANTHILL_SEED";
pub const FRAME_RATE_VAR: &str = "ANTHILL_FRAME_RATE";
pub const TIME_SCALE_VAR: &str = "ANTHILL_TIME_SCALE";
pub const VIEWPORT_VAR: &str = "ANTHILL_VIEWPORT";
pub const MAX_FRAMES_VAR: &str = "ANTHILL_MAX_FRAMES";

/// Frame cap used by the headless binary when none is configured
/// (ten minutes of game time at 60 fps).
pub const DEFAULT_MAX_FRAMES: u64 = 36_000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub sim: SimConfig,
    /// Wall-clock frames per second. 0 runs frames back to back.
    pub frame_rate: u32,
    pub max_frames: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sim: SimConfig::default(),
            frame_rate: FRAME_RATE,
            max_frames: DEFAULT_MAX_FRAMES,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(seed) = lookup(SEED_VAR).and_then(|v| v.trim().parse().ok()) {
            config.sim.seed = seed;
        }
        if let Some(rate) = lookup(FRAME_RATE_VAR).and_then(|v| v.trim().parse().ok()) {
            config.frame_rate = rate;
        }
        if let Some(scale) = lookup(TIME_SCALE_VAR).and_then(|v| v.trim().parse::<f64>().ok()) {
            if scale.is_finite() {
                config.sim.time_scale = scale.clamp(0.0, 4.0);
            }
        }
        if let Some((w, h)) = lookup(VIEWPORT_VAR).as_deref().and_then(parse_viewport) {
            config.sim.viewport_width = w;
            config.sim.viewport_height = h;
        }
        if let Some(frames) = lookup(MAX_FRAMES_VAR).and_then(|v| v.trim().parse().ok()) {
            config.max_frames = frames;
        }

        config
    }

    /// Wall-clock duration of one frame at 1x speed, or `None` when unpaced.
    pub fn frame_duration(&self) -> Option<Duration> {
        (self.frame_rate > 0)
            .then(|| Duration::from_nanos(1_000_000_000 / u64::from(self.frame_rate)))
    }
}

/// Parse `WIDTHxHEIGHT`, e.g. `1920x1080`.
pub fn parse_viewport(value: &str) -> Option<(f64, f64)> {
    let (w, h) = value.trim().split_once(['x', 'X'])?;
    let w: f64 = w.trim().parse().ok()?;
    let h: f64 = h.trim().parse().ok()?;
    (w > 0.0 && h > 0.0).then_some((w, h))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config.sim.seed, 42);
        assert_eq!(config.frame_rate, 60);
        assert_eq!(config.max_frames, DEFAULT_MAX_FRAMES);
        assert_eq!(config.sim.viewport_width, 1280.0);
    }

    #[test]
    fn test_reads_all_variables() {
        let config = AppConfig::from_lookup(lookup(&[
            (SEED_VAR, "7"),
            (FRAME_RATE_VAR, "0"),
            (TIME_SCALE_VAR, "2.5"),
            (VIEWPORT_VAR, "1920x1080"),
            (MAX_FRAMES_VAR, "600"),
        ]));
        assert_eq!(config.sim.seed, 7);
        assert_eq!(config.frame_rate, 0);
        assert!(config.frame_duration().is_none());
        assert_eq!(config.sim.time_scale, 2.5);
        assert_eq!(config.sim.viewport_width, 1920.0);
        assert_eq!(config.sim.viewport_height, 1080.0);
        assert_eq!(config.max_frames, 600);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = AppConfig::from_lookup(lookup(&[
            (SEED_VAR, "abc"),
            (TIME_SCALE_VAR, "9"),
            (VIEWPORT_VAR, "wide"),
        ]));
        assert_eq!(config.sim.seed, 42);
        assert_eq!(config.sim.time_scale, 4.0);
        assert_eq!(config.sim.viewport_width, 1280.0);
    }

    #[test]
    fn test_parse_viewport() {
        assert_eq!(parse_viewport("800x600"), Some((800.0, 600.0)));
        assert_eq!(parse_viewport(" 800 X 600 "), Some((800.0, 600.0)));
        assert_eq!(parse_viewport("0x600"), None);
        assert_eq!(parse_viewport("800"), None);
    }

    #[test]
    fn test_frame_duration() {
        let config = AppConfig::default();
        assert_eq!(
            config.frame_duration().map(|d| d.as_nanos()),
            Some(1_000_000_000u128 / 60)
        );
    }
}
