//! Terminal 2048 (default binary).

use std::fs::OpenOptions;

use anyhow::{Context, Result};
use log::info;

use tui_2048::app;
use tui_2048::config::Config;
use tui_2048::core::GameState;
use tui_2048::engine::{HighScoreStore, MemoryHighScoreStore, Session};
use tui_2048::persist::JsonHighScoreStore;
use tui_2048::term::TerminalRenderer;

fn main() -> Result<()> {
    let config = Config::load()?;
    init_logging(&config)?;

    let seed = config.seed.unwrap_or_else(rand::random);
    info!("starting: seed {} target {}", seed, config.target);

    let store: Box<dyn HighScoreStore> = if config.persist {
        info!("high score file: {}", config.high_score_file.display());
        Box::new(JsonHighScoreStore::new(&config.high_score_file))
    } else {
        Box::new(MemoryHighScoreStore::default())
    };
    let game = GameState::new(seed).with_target(config.target);
    let mut session = Session::with_game(game, store);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = app::run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Logs go to `--log-file` when given; the terminal belongs to the game.
fn init_logging(config: &Config) -> Result<()> {
    let default_filter = if config.log_file.is_some() { "info" } else { "off" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));

    if let Some(path) = &config.log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}
