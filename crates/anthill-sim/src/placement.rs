//! Tower placement and merge rules.
//!
//! Pure queries over the world. Nothing here mutates state; the engine
//! applies a placement or merge only after validation succeeds.

use hecs::{Entity, World};

use anthill_core::components::Tower;
use anthill_core::constants::{MERGE_RADIUS, TOWER_CLICK_RADIUS, TOWER_MIN_SPACING};
use anthill_core::enums::TowerKind;
use anthill_core::errors::{MergeError, PlacementError};
use anthill_core::stats::tower_cost;
use anthill_core::types::Position;

use crate::economy::Wallet;
use crate::path::PathModel;

/// Check a placement. Rules apply in order: funds, path, spacing.
pub fn validate_placement(
    world: &World,
    path: &PathModel,
    wallet: &Wallet,
    kind: TowerKind,
    at: &Position,
) -> Result<(), PlacementError> {
    let cost = tower_cost(kind);
    if !wallet.can_afford(cost) {
        return Err(PlacementError::InsufficientFunds {
            kind,
            cost,
            gold: wallet.gold,
        });
    }

    if path.is_on_path(at) {
        return Err(PlacementError::OnPath);
    }

    let crowded = world
        .query::<(&Tower, &Position)>()
        .iter()
        .any(|(_, (_, pos))| pos.distance_to(at) < TOWER_MIN_SPACING);
    if crowded {
        return Err(PlacementError::Overlapping);
    }

    Ok(())
}

/// What a validated merge produces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MergePlan {
    pub kind: TowerKind,
    pub level: u32,
    pub position: Position,
}

/// Check that `dragged` dropped at `drop_at` can merge into `stationary`.
pub fn validate_merge(
    world: &World,
    dragged: Entity,
    stationary: Entity,
    drop_at: &Position,
) -> Result<MergePlan, MergeError> {
    let (dragged_kind, dragged_level) = tower_info(world, dragged)?;
    let (kind, level, position) = {
        let mut query = world
            .query_one::<(&Tower, &Position)>(stationary)
            .map_err(|_| MergeError::UnknownTower)?;
        let (tower, pos) = query.get().ok_or(MergeError::UnknownTower)?;
        (tower.kind, tower.level, *pos)
    };

    if dragged == stationary {
        return Err(MergeError::SameTower);
    }
    if dragged_kind != kind {
        return Err(MergeError::TypeMismatch {
            dragged: dragged_kind,
            stationary: kind,
        });
    }
    if dragged_level != level {
        return Err(MergeError::LevelMismatch {
            dragged: dragged_level,
            stationary: level,
        });
    }

    let distance = drop_at.distance_to(&position);
    if distance >= MERGE_RADIUS {
        return Err(MergeError::TooFar { distance });
    }

    Ok(MergePlan {
        kind,
        level: level + 1,
        position,
    })
}

fn tower_info(world: &World, entity: Entity) -> Result<(TowerKind, u32), MergeError> {
    let tower = world
        .get::<&Tower>(entity)
        .map_err(|_| MergeError::UnknownTower)?;
    Ok((tower.kind, tower.level))
}

/// First tower whose centre is within the click radius of `at`.
pub fn tower_at(world: &World, at: &Position) -> Option<Entity> {
    world
        .query::<(&Tower, &Position)>()
        .iter()
        .find(|(_, (_, pos))| pos.distance_to(at) < TOWER_CLICK_RADIUS)
        .map(|(entity, _)| entity)
}

/// First tower `dragged` could merge into if released at `drop_at`.
pub fn find_merge_partner(world: &World, dragged: Entity, drop_at: &Position) -> Option<Entity> {
    let (kind, level) = tower_info(world, dragged).ok()?;
    world
        .query::<(&Tower, &Position)>()
        .iter()
        .find(|(entity, (tower, pos))| {
            *entity != dragged
                && tower.kind == kind
                && tower.level == level
                && pos.distance_to(drop_at) < MERGE_RADIUS
        })
        .map(|(entity, _)| entity)
}
