use std::sync::Arc;
use std::time::Duration;

use anyhow::anyhow;

use anthill_app::autopilot::Autopilot;
use anthill_app::config::AppConfig;
use anthill_app::game_loop::spawn_game_loop;
use anthill_app::state::AppState;

/// How often the main thread reports progress.
const REPORT_INTERVAL: Duration = Duration::from_secs(1);

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

fn main() -> anyhow::Result<()> {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    let config = AppConfig::from_env();
    let pilot = Autopilot::new(config.sim.viewport_width, config.sim.viewport_height);
    let state = AppState::new();

    let (command_tx, handle) =
        spawn_game_loop(config, Arc::clone(&state.latest_snapshot), Some(pilot))?;
    *state
        .command_tx
        .lock()
        .map_err(|_| anyhow!("command channel lock poisoned"))? = Some(command_tx);

    let mut last_frame = None;
    while !handle.is_finished() {
        std::thread::sleep(REPORT_INTERVAL);
        let Some(snapshot) = state.snapshot() else {
            continue;
        };
        if last_frame == Some(snapshot.time.frame) {
            continue;
        }
        last_frame = Some(snapshot.time.frame);
        tracing::info!(
            frame = snapshot.time.frame,
            phase = ?snapshot.phase,
            wave = snapshot.wave.current,
            gold = snapshot.economy.gold,
            lives = snapshot.economy.lives,
            enemies = snapshot.enemies.len(),
            towers = snapshot.towers.len(),
            "progress"
        );
    }

    let summary = handle
        .join()
        .map_err(|_| anyhow!("game loop thread panicked"))?;
    state.command_tx.lock().map_err(|_| anyhow!("command channel lock poisoned"))?.take();

    tracing::info!(
        phase = ?summary.phase,
        waves = summary.waves_completed,
        kills = summary.kills,
        leaks = summary.leaks,
        score = summary.score,
        "run finished"
    );
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
