//! Dodge Grid entry point
//!
//! Seeds the session from the clock, takes over the terminal and runs the
//! game loop until the player quits.

use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use env_logger::Target;

use dodge_grid::platform::{LogBuffer, SystemClock, Terminal};
use dodge_grid::sim::GameState;
use dodge_grid::{Game, Settings};

fn main() -> anyhow::Result<()> {
    // Logs are held until the terminal is restored
    let logs = LogBuffer::new();
    env_logger::Builder::from_default_env()
        .target(Target::Pipe(Box::new(logs.clone())))
        .init();

    let result = play();
    logs.drain_into(&mut io::stderr())
        .context("failed to write buffered logs")?;
    result
}

fn play() -> anyhow::Result<()> {
    log::info!("Dodge Grid starting...");

    let settings = Settings::default();
    match serde_json::to_string(&settings) {
        Ok(json) => log::debug!("Settings: {}", json),
        Err(e) => log::warn!("Failed to encode settings: {}", e),
    }

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    let state = GameState::new(seed, settings).context("invalid game settings")?;
    log::info!("Game initialized with seed: {}", seed);

    let terminal = Terminal::enter().context("failed to set up the terminal")?;
    let mut game = Game::new(state, terminal, SystemClock);
    let result = game.run();

    // Restore the terminal before anything else is reported
    let stats = game.state().stats.clone();
    drop(game);
    result.context("terminal I/O failed")?;

    log::info!(
        "Session over: {} ticks, {} deaths, {} wins, best level {}",
        stats.ticks,
        stats.deaths,
        stats.wins,
        stats.best_level
    );
    Ok(())
}
