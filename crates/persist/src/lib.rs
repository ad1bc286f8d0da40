//! JSON file store for the high score.
//!
//! The file holds a single record, `{"high_score": 1234}`. A bare number
//! (`1234`) is also accepted on read. A missing file reads as 0; writes go to a
//! sibling temp file that is then renamed over the target.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::debug;
use serde::{Deserialize, Serialize};

use tui_2048_engine::HighScoreStore;

/// Default file name, relative to the working directory.
pub const DEFAULT_HIGH_SCORE_FILE: &str = "high_score.json";

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct HighScoreRecord {
    high_score: u32,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StoredValue {
    Record(HighScoreRecord),
    Bare(u32),
}

/// Parse the contents of a high score file.
pub fn parse_high_score(text: &str) -> Result<u32, StoreError> {
    let value = match serde_json::from_str::<StoredValue>(text)? {
        StoredValue::Record(record) => record.high_score,
        StoredValue::Bare(score) => score,
    };
    Ok(value)
}

/// Render a high score as file contents.
pub fn format_high_score(score: u32) -> Result<String, StoreError> {
    Ok(serde_json::to_string(&HighScoreRecord { high_score: score })?)
}

#[derive(Debug, Clone)]
pub struct JsonHighScoreStore {
    path: PathBuf,
}

impl JsonHighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored score; a missing file is 0.
    pub fn read(&self) -> Result<u32, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => parse_high_score(&text),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("no high score file at {}", self.path.display());
                Ok(0)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Write the score, replacing the file atomically where the platform allows.
    pub fn write(&self, score: u32) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, format_high_score(score)?)?;
        fs::rename(&tmp, &self.path)?;
        debug!("saved high score {} to {}", score, self.path.display());
        Ok(())
    }
}

impl Default for JsonHighScoreStore {
    fn default() -> Self {
        Self::new(DEFAULT_HIGH_SCORE_FILE)
    }
}

impl HighScoreStore for JsonHighScoreStore {
    fn load(&mut self) -> anyhow::Result<u32> {
        self.read()
            .with_context(|| format!("reading high score from {}", self.path.display()))
    }

    fn save(&mut self, score: u32) -> anyhow::Result<()> {
        self.write(score)
            .with_context(|| format!("writing high score to {}", self.path.display()))
    }
}
