//! Scripted player for headless runs.
//!
//! Reads snapshots and answers with commands: start the game, buy towers on
//! free spots beside the path, merge matching towers once the spots run out,
//! and call the next wave as soon as it is allowed.

use anthill_core::commands::PlayerCommand;
use anthill_core::constants::TOWER_MIN_SPACING;
use anthill_core::enums::{GamePhase, TowerKind};
use anthill_core::state::{GameStateSnapshot, TowerView};
use anthill_core::stats::tower_cost;
use anthill_core::types::Position;
use anthill_sim::path::point_to_segment_distance;

/// Distance from the path edge to a candidate tower spot.
const SPOT_CLEARANCE: f64 = 25.0;

const BUILD_ORDER: [TowerKind; 6] = [
    TowerKind::Laser,
    TowerKind::Archer,
    TowerKind::Machinegun,
    TowerKind::Bomb,
    TowerKind::Archer,
    TowerKind::Machinegun,
];

#[derive(Debug, Clone)]
pub struct Autopilot {
    viewport: (f64, f64),
    spots: Vec<Position>,
    /// Path waypoints the spots were computed from.
    path_key: Vec<Position>,
}

impl Autopilot {
    pub fn new(viewport_width: f64, viewport_height: f64) -> Self {
        Self {
            viewport: (viewport_width, viewport_height),
            spots: Vec::new(),
            path_key: Vec::new(),
        }
    }

    pub fn spots(&self) -> &[Position] {
        &self.spots
    }

    /// Commands to send in response to `snapshot`.
    pub fn decide(&mut self, snapshot: &GameStateSnapshot) -> Vec<PlayerCommand> {
        match snapshot.phase {
            GamePhase::Menu => vec![PlayerCommand::StartGame],
            GamePhase::Playing => self.play(snapshot),
            GamePhase::Paused | GamePhase::Defeat | GamePhase::Victory => Vec::new(),
        }
    }

    fn play(&mut self, snapshot: &GameStateSnapshot) -> Vec<PlayerCommand> {
        if self.path_key != snapshot.path.waypoints {
            self.path_key = snapshot.path.waypoints.clone();
            self.spots = candidate_spots(&snapshot.path.waypoints, snapshot.path.width, self.viewport);
        }

        let mut commands = Vec::new();
        let kind = BUILD_ORDER[snapshot.towers.len() % BUILD_ORDER.len()];

        match self.free_spot(&snapshot.towers) {
            Some(spot) if snapshot.economy.gold >= tower_cost(kind) => {
                commands.push(PlayerCommand::PlaceTower {
                    kind,
                    x: spot.x,
                    y: spot.y,
                });
            }
            Some(_) => {}
            None => {
                if let Some((dragged, stationary)) = merge_pair(&snapshot.towers) {
                    commands.push(PlayerCommand::MergeTowers {
                        dragged: dragged.id,
                        stationary: stationary.id,
                        drop_x: stationary.position.x,
                        drop_y: stationary.position.y,
                    });
                }
            }
        }

        if snapshot.wave.can_start_next {
            commands.push(PlayerCommand::StartNextWave);
        }
        commands
    }

    fn free_spot(&self, towers: &[TowerView]) -> Option<Position> {
        self.spots.iter().copied().find(|spot| {
            towers
                .iter()
                .all(|t| t.position.distance_to(spot) >= TOWER_MIN_SPACING)
        })
    }
}

/// Spots beside the midpoint of every path leg, on both sides, kept only if
/// they are inside the viewport, clear of the whole path and of each other.
pub fn candidate_spots(waypoints: &[Position], width: f64, viewport: (f64, f64)) -> Vec<Position> {
    let offset = width / 2.0 + SPOT_CLEARANCE;
    let mut spots: Vec<Position> = Vec::new();

    for leg in waypoints.windows(2) {
        let (a, b) = (leg[0], leg[1]);
        let dir = (b.to_vec() - a.to_vec()).normalize_or_zero();
        if dir.length_squared() == 0.0 {
            continue;
        }
        let normal = dir.perp();
        let mid = (a.to_vec() + b.to_vec()) / 2.0;

        for side in [1.0, -1.0] {
            let p = mid + normal * offset * side;
            let spot = Position::new(p.x, p.y);
            let inside = spot.x >= 0.0
                && spot.y >= 0.0
                && spot.x <= viewport.0
                && spot.y <= viewport.1;
            let clear_of_path = waypoints
                .windows(2)
                .all(|seg| point_to_segment_distance(&spot, &seg[0], &seg[1]) >= width / 2.0);
            let clear_of_spots = spots
                .iter()
                .all(|s| s.distance_to(&spot) >= TOWER_MIN_SPACING);
            if inside && clear_of_path && clear_of_spots {
                spots.push(spot);
            }
        }
    }

    spots
}

/// First two towers sharing kind and level.
fn merge_pair(towers: &[TowerView]) -> Option<(&TowerView, &TowerView)> {
    towers.iter().enumerate().find_map(|(i, a)| {
        towers[i + 1..]
            .iter()
            .find(|b| b.kind == a.kind && b.level == a.level)
            .map(|b| (a, b))
    })
}
