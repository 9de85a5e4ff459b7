#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::components::{Enemy, Particle, Tower};
    use crate::enums::*;
    use crate::errors::{MergeError, PlacementError};
    use crate::events::GameEvent;
    use crate::state::GameStateSnapshot;
    use crate::stats::*;
    use crate::types::{Position, SimTime};

    fn make_enemy(kind: EnemyKind) -> Enemy {
        let stats = enemy_stats(kind);
        Enemy {
            kind,
            health: stats.max_health,
            max_health: stats.max_health,
            speed: stats.speed,
            bounty: stats.bounty,
            progress: 0.0,
            alive: true,
            reached_end: false,
            bounty_awarded: false,
        }
    }

    // ---- Stat tables ----

    #[test]
    fn test_level_one_stats_match_base_table() {
        for kind in TowerKind::ALL {
            let base = tower_profile(kind).base;
            let stats = tower_stats(kind, 1);
            assert_eq!(stats.damage, base.damage, "{kind:?} damage");
            assert_eq!(stats.range, base.range, "{kind:?} range");
            assert_eq!(stats.fire_interval_ms, base.fire_interval_ms, "{kind:?} interval");
            assert_eq!(stats.area_radius, base.area_radius, "{kind:?} area");
        }
    }

    #[test]
    fn test_archer_level_two_grows_damage_and_range() {
        let stats = tower_stats(TowerKind::Archer, 2);
        assert_eq!(stats.damage, 12.0);
        assert_eq!(stats.range, 172.0); // floor(150 * 1.15)
        assert_eq!(stats.fire_interval_ms, 1000.0);
    }

    #[test]
    fn test_machinegun_grows_fire_rate() {
        let stats = tower_stats(TowerKind::Machinegun, 2);
        assert_eq!(stats.fire_interval_ms, 240.0); // floor(300 / 1.25)
        assert_eq!(stats.damage, 5.0); // floor(5 * 1.15)
        assert_eq!(stats.range, 100.0);
    }

    #[test]
    fn test_bomb_grows_area() {
        let stats = tower_stats(TowerKind::Bomb, 3);
        assert_eq!(stats.damage, 48.0); // floor(30 * 1.6)
        assert_eq!(stats.area_radius, 60.0); // floor(50 * 1.2)
        assert_eq!(stats.range, 140.0);
    }

    #[test]
    fn test_laser_grows_everything_but_area() {
        let stats = tower_stats(TowerKind::Laser, 2);
        assert_eq!(stats.damage, 62.0); // floor(50 * 1.25)
        assert_eq!(stats.range, 220.0);
        assert_eq!(stats.fire_interval_ms, 1304.0); // floor(1500 / 1.15)
        assert_eq!(stats.area_radius, 0.0);
    }

    #[test]
    fn test_level_zero_treated_as_one() {
        assert_eq!(
            tower_stats(TowerKind::Archer, 0),
            tower_stats(TowerKind::Archer, 1)
        );
    }

    #[test]
    fn test_tower_costs() {
        assert_eq!(tower_cost(TowerKind::Archer), 50);
        assert_eq!(tower_cost(TowerKind::Machinegun), 100);
        assert_eq!(tower_cost(TowerKind::Bomb), 150);
        assert_eq!(tower_cost(TowerKind::Laser), 200);
    }

    #[test]
    fn test_tower_stats_follow_level() {
        let mut tower = Tower::new(TowerKind::Archer, 1);
        assert_eq!(tower.stats().damage, 10.0);
        tower.level = 2;
        assert_eq!(tower.stats().damage, 12.0);
    }

    #[test]
    fn test_wave_ramps() {
        let ants = &WAVE_RAMPS[0];
        let scorpions = &WAVE_RAMPS[2];
        assert_eq!(ants.count_for(1), 4);
        assert_eq!(ants.count_for(10), 18);
        assert_eq!(scorpions.count_for(2), 0);
        assert_eq!(scorpions.count_for(3), 2);
    }

    // ---- Enemy damage ----

    #[test]
    fn test_apply_damage_clamps_and_kills() {
        let mut enemy = make_enemy(EnemyKind::Ant);
        enemy.apply_damage(15.0);
        assert!(enemy.alive);
        assert_eq!(enemy.health, 5.0);
        assert!((enemy.health_fraction() - 0.25).abs() < 1e-12);

        enemy.apply_damage(15.0);
        assert!(!enemy.alive);
        assert_eq!(enemy.health, 0.0);
        assert!(enemy.is_killed());
        assert_eq!(enemy.health_fraction(), 0.0);
    }

    #[test]
    fn test_damage_on_dead_enemy_is_ignored() {
        let mut enemy = make_enemy(EnemyKind::Ant);
        enemy.apply_damage(100.0);
        enemy.apply_damage(100.0);
        assert_eq!(enemy.health, 0.0);
    }

    #[test]
    fn test_leaked_enemy_is_not_killed() {
        let mut enemy = make_enemy(EnemyKind::Caterpillar);
        enemy.reached_end = true;
        enemy.alive = false;
        assert!(!enemy.is_killed());
        assert!(!enemy.is_traveling());
    }

    // ---- Particles ----

    #[test]
    fn test_particle_fade() {
        let mut particle = Particle {
            kind: ParticleKind::Hit,
            velocity: glam::DVec2::ZERO,
            age_ms: 0.0,
            lifetime_ms: 500.0,
            color_seed: 0.5,
        };
        assert_eq!(particle.fade(), 1.0);
        particle.age_ms = 250.0;
        assert!((particle.fade() - 0.5).abs() < 1e-12);
        particle.age_ms = 600.0;
        assert!(particle.is_expired());
        assert_eq!(particle.fade(), 0.0);
    }

    // ---- Serde ----

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::PlaceTower {
                kind: TowerKind::Bomb,
                x: 10.0,
                y: 20.0,
            },
            PlayerCommand::MergeTowers {
                dragged: 1,
                stationary: 2,
                drop_x: 3.0,
                drop_y: 4.0,
            },
            PlayerCommand::StartGame,
            PlayerCommand::Resize {
                width: 800.0,
                height: 600.0,
            },
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }

        let json = serde_json::to_string(&PlayerCommand::StartNextWave).unwrap();
        assert_eq!(json, r#"{"type":"StartNextWave"}"#);
    }

    #[test]
    fn test_game_event_serde() {
        let event = GameEvent::WaveCompleted { wave: 3, bonus: 25 };
        let json = serde_json::to_string(&event).unwrap();
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }

    /// Verify GameStateSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.frame, back.time.frame);
        assert_eq!(snapshot.phase, back.phase);
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    // ---- Errors ----

    #[test]
    fn test_rejection_messages() {
        let err = PlacementError::InsufficientFunds {
            kind: TowerKind::Laser,
            cost: 200,
            gold: 120,
        };
        assert_eq!(
            err.to_string(),
            "not enough gold for Laser: costs 200, have 120"
        );
        let err = MergeError::TooFar { distance: 52.31 };
        assert!(err.to_string().contains("52.3"));
    }

    // ---- Geometry ----

    #[test]
    fn test_position_distance_and_lerp() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
        let mid = a.lerp(&b, 0.5);
        assert_eq!(mid, Position::new(1.5, 2.0));
        let v: glam::DVec2 = b.into();
        assert_eq!(Position::from(v), b);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..60 {
            time.advance(1000.0 / 60.0);
        }
        assert_eq!(time.frame, 60);
        assert!((time.elapsed_secs() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_movement_mode_by_kind() {
        assert_eq!(TowerKind::Archer.movement_mode(), MovementMode::Ballistic);
        assert_eq!(TowerKind::Machinegun.movement_mode(), MovementMode::Ballistic);
        assert_eq!(TowerKind::Bomb.movement_mode(), MovementMode::Homing);
        assert_eq!(TowerKind::Laser.movement_mode(), MovementMode::Beam);
    }
}
