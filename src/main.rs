//! Scorecast demo feed - prints a few ticks of simulated live scores.
//!
//! The library does the real work; this binary just wires the store, the
//! preference accessors, and the mock generator together the way a dashboard
//! frontend would.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use scorecast::mock::{DEFAULT_RECENT_HOURS, DEFAULT_UPCOMING_DAYS};
use scorecast::{
    CacheManager, Config, FileBackend, LiveUpdater, LocalStore, MockGenerator, PreferenceManager,
    TeamCatalog,
};

/// Ticks of live output before the demo exits.
const DEMO_TICKS: u32 = 5;

/// Fallback update cadence when the config does not set one.
const DEFAULT_UPDATE_INTERVAL_SECS: u64 = 2;

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();
    init_tracing();
    info!("scorecast starting");

    let config = Config::load()?;
    let store = Arc::new(LocalStore::new(Box::new(FileBackend::new(
        config.storage_file()?,
    ))));

    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 && args[1] == "--cleanup" {
        let cache = CacheManager::new(store);
        let removed = cache.cleanup_expired_data();
        println!("Removed {} expired cache entries", removed);
        return Ok(());
    }

    let prefs = PreferenceManager::new(store.clone());
    let preferences = prefs.user_preferences();
    let favorites = prefs.favorite_teams();
    let cache = CacheManager::new(store);

    let generator = Arc::new(MockGenerator::new(&TeamCatalog::builtin()));
    let interval = Duration::from_secs(
        config
            .update_interval_secs
            .unwrap_or(DEFAULT_UPDATE_INTERVAL_SECS),
    );
    let updater = LiveUpdater::new(generator.clone(), interval).start();

    let recent = generator.recent_games(None, DEFAULT_RECENT_HOURS).await;
    let upcoming = generator.upcoming_games(None, DEFAULT_UPCOMING_DAYS).await;
    println!(
        "Live scores (theme: {:?}, refresh every {}s) - {} finals in the last {}h, {} games in the next {}d",
        preferences.theme,
        interval.as_secs(),
        recent.len(),
        DEFAULT_RECENT_HOURS,
        upcoming.len(),
        DEFAULT_UPCOMING_DAYS
    );

    for tick in 1..=DEMO_TICKS {
        tokio::time::sleep(interval).await;
        let live = generator.live_games(None).await;
        cache.cache_game_data("live-snapshot", &live);

        println!("--- tick {} ---", tick);
        for game in &live {
            let score = game.score.unwrap_or_default();
            let clock = game
                .clock
                .as_ref()
                .map(|c| format!("P{} {}", c.period, c.time_remaining))
                .unwrap_or_default();
            let starred = favorites.contains(&game.home_team.id)
                || favorites.contains(&game.away_team.id);
            println!(
                "{} [{}] {} {}-{} {} ({}) on {}",
                if starred { "*" } else { " " },
                game.sport,
                game.away_team.abbreviation,
                score.away,
                score.home,
                game.home_team.abbreviation,
                clock,
                game.broadcast
            );
        }
    }

    updater.stop().await;
    info!("scorecast shutting down");
    Ok(())
}
