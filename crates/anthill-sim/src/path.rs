//! Enemy path geometry.
//!
//! The path is a polyline defined in viewport fractions. Absolute waypoints,
//! segment lengths and the total length are cached and rebuilt on resize, so
//! progress values (resolution independent) stay valid across resizes.

use anthill_core::constants::{PATH_WAYPOINTS, PATH_WIDTH};
use anthill_core::types::Position;

/// One straight leg of the path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathSegment {
    pub start: Position,
    pub end: Position,
    pub length: f64,
}

/// Polyline path with cached absolute geometry.
#[derive(Debug, Clone)]
pub struct PathModel {
    /// Waypoints as fractions of the viewport size.
    normalized: Vec<(f64, f64)>,
    width: f64,
    viewport: (f64, f64),
    waypoints: Vec<Position>,
    segments: Vec<PathSegment>,
    total_length: f64,
}

impl PathModel {
    /// The built-in level path scaled to the given viewport.
    pub fn default_level(viewport_width: f64, viewport_height: f64) -> Self {
        Self::new(PATH_WAYPOINTS.to_vec(), PATH_WIDTH, viewport_width, viewport_height)
    }

    /// Build a path from normalized waypoints. A single waypoint is doubled
    /// so the path always has at least one (zero-length) segment.
    pub fn new(
        mut normalized: Vec<(f64, f64)>,
        width: f64,
        viewport_width: f64,
        viewport_height: f64,
    ) -> Self {
        if normalized.is_empty() {
            normalized.push((0.0, 0.0));
        }
        if normalized.len() == 1 {
            normalized.push(normalized[0]);
        }

        let mut path = Self {
            normalized,
            width,
            viewport: (viewport_width, viewport_height),
            waypoints: Vec::new(),
            segments: Vec::new(),
            total_length: 0.0,
        };
        path.rebuild();
        path
    }

    /// Recompute absolute geometry for a new viewport size.
    pub fn resize(&mut self, viewport_width: f64, viewport_height: f64) {
        self.viewport = (viewport_width, viewport_height);
        self.rebuild();
    }

    fn rebuild(&mut self) {
        let (w, h) = self.viewport;
        self.waypoints = self
            .normalized
            .iter()
            .map(|&(x, y)| Position::new(x * w, y * h))
            .collect();
        self.segments = self
            .waypoints
            .windows(2)
            .map(|pair| PathSegment {
                start: pair[0],
                end: pair[1],
                length: pair[0].distance_to(&pair[1]),
            })
            .collect();
        self.total_length = self.segments.iter().map(|s| s.length).sum();
    }

    pub fn waypoints(&self) -> &[Position] {
        &self.waypoints
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    pub fn viewport(&self) -> (f64, f64) {
        self.viewport
    }

    pub fn start(&self) -> Position {
        self.waypoints[0]
    }

    pub fn end(&self) -> Position {
        self.waypoints[self.waypoints.len() - 1]
    }

    /// Point at a fraction of the total path length.
    pub fn position_at_progress(&self, progress: f64) -> Position {
        if progress >= 1.0 {
            return self.end();
        }
        if progress <= 0.0 || self.total_length <= 0.0 {
            return self.start();
        }

        let target = progress * self.total_length;
        let mut accumulated = 0.0;
        for segment in &self.segments {
            if accumulated + segment.length >= target {
                if segment.length <= 0.0 {
                    return segment.start;
                }
                let t = (target - accumulated) / segment.length;
                return segment.start.lerp(&segment.end, t);
            }
            accumulated += segment.length;
        }

        self.end()
    }

    /// Shortest distance from `point` to any path segment.
    pub fn distance_to_path(&self, point: &Position) -> f64 {
        self.segments
            .iter()
            .map(|s| point_to_segment_distance(point, &s.start, &s.end))
            .fold(f64::INFINITY, f64::min)
    }

    /// Whether `point` lies on the path band (strictly within half the width).
    pub fn is_on_path(&self, point: &Position) -> bool {
        self.distance_to_path(point) < self.width / 2.0
    }
}

/// Distance from `p` to the segment `a`–`b` using the clamped projection.
pub fn point_to_segment_distance(p: &Position, a: &Position, b: &Position) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;

    if len_sq == 0.0 {
        return p.distance_to(a);
    }

    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
    p.distance_to(&Position::new(a.x + t * dx, a.y + t * dy))
}
