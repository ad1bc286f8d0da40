//! High score persistence seam.

use anyhow::Result;

/// Storage for the single best score.
///
/// Implementations may fail; callers treat failures as warnings and keep playing.
pub trait HighScoreStore {
    /// Read the stored best score.
    fn load(&mut self) -> Result<u32>;

    /// Replace the stored best score.
    fn save(&mut self, score: u32) -> Result<()>;
}

impl<T: HighScoreStore + ?Sized> HighScoreStore for Box<T> {
    fn load(&mut self) -> Result<u32> {
        (**self).load()
    }

    fn save(&mut self, score: u32) -> Result<()> {
        (**self).save(score)
    }
}

/// In-memory store. Used when persistence is disabled and in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryHighScoreStore {
    value: u32,
    saves: u32,
}

impl MemoryHighScoreStore {
    pub fn new(value: u32) -> Self {
        Self { value, saves: 0 }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Number of successful `save` calls.
    pub fn saves(&self) -> u32 {
        self.saves
    }
}

impl HighScoreStore for MemoryHighScoreStore {
    fn load(&mut self) -> Result<u32> {
        Ok(self.value)
    }

    fn save(&mut self, score: u32) -> Result<()> {
        self.value = score;
        self.saves += 1;
        Ok(())
    }
}
