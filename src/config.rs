//! Runtime configuration.
//!
//! Resolution order: built-in defaults, then `TUI_2048_*` environment
//! variables, then command-line flags.
//!
//! - `TUI_2048_SEED`: RNG seed (default: random per run)
//! - `TUI_2048_HIGH_SCORE_FILE`: high score file (default: `high_score.json`)
//! - `TUI_2048_NO_PERSIST`: set to "1" or "true" to keep the high score in memory only
//! - `TUI_2048_TARGET`: winning tile (default: 2048)
//! - `TUI_2048_LOG_FILE`: append logs to this file

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;

use tui_2048_persist::DEFAULT_HIGH_SCORE_FILE;
use tui_2048_types::TARGET_TILE;

/// Smallest accepted winning tile.
pub const MIN_TARGET: u32 = 8;

#[derive(Parser, Debug, Default, Clone)]
#[command(name = "tui-2048", version, about = "2048 in the terminal")]
pub struct Args {
    /// Seed for tile spawning; the same seed replays the same game
    #[arg(long)]
    pub seed: Option<u64>,

    /// File the high score is read from and written to
    #[arg(long, value_name = "FILE")]
    pub high_score_file: Option<PathBuf>,

    /// Keep the high score in memory only
    #[arg(long)]
    pub no_persist: bool,

    /// Tile value that wins the game (power of two, at least 8)
    #[arg(long)]
    pub target: Option<u32>,

    /// Append logs to this file (filter with RUST_LOG)
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: Option<u64>,
    pub high_score_file: PathBuf,
    pub persist: bool,
    pub target: u32,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            high_score_file: PathBuf::from(DEFAULT_HIGH_SCORE_FILE),
            persist: true,
            target: TARGET_TILE,
            log_file: None,
        }
    }
}

impl Config {
    /// Defaults overridden by process environment variables.
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Defaults overridden by `lookup`; unparsable values are ignored.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = non_empty("TUI_2048_SEED").and_then(|s| s.parse().ok());

        let high_score_file = non_empty("TUI_2048_HIGH_SCORE_FILE")
            .map(PathBuf::from)
            .unwrap_or(defaults.high_score_file);

        let no_persist = non_empty("TUI_2048_NO_PERSIST")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        let target = non_empty("TUI_2048_TARGET")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.target);

        let log_file = non_empty("TUI_2048_LOG_FILE").map(PathBuf::from);

        Self {
            seed,
            high_score_file,
            persist: !no_persist,
            target,
            log_file,
        }
    }

    /// Apply command-line flags on top of this configuration.
    pub fn with_args(mut self, args: Args) -> Self {
        if args.seed.is_some() {
            self.seed = args.seed;
        }
        if let Some(path) = args.high_score_file {
            self.high_score_file = path;
        }
        if args.no_persist {
            self.persist = false;
        }
        if let Some(target) = args.target {
            self.target = target;
        }
        if args.log_file.is_some() {
            self.log_file = args.log_file;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.target < MIN_TARGET || !self.target.is_power_of_two() {
            bail!(
                "invalid target {}: must be a power of two and at least {}",
                self.target,
                MIN_TARGET
            );
        }
        Ok(())
    }

    /// Environment plus parsed command line, validated.
    pub fn load() -> Result<Self> {
        let config = Self::from_env().with_args(Args::parse());
        config.validate()?;
        Ok(config)
    }
}
