use crate::types::{Grid, Outcome, GRID_SIZE, TARGET_TILE};

/// Plain copy of everything a view needs to draw one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub grid: Grid,
    pub score: u32,
    pub outcome: Outcome,
    pub can_undo: bool,
    pub moves: u32,
    pub max_tile: u32,
    pub target: u32,
    pub episode_id: u32,
    /// (row, col) of the tile spawned by the latest move.
    pub last_spawn: Option<(usize, usize)>,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.grid = [[0; GRID_SIZE]; GRID_SIZE];
        self.score = 0;
        self.outcome = Outcome::InProgress;
        self.can_undo = false;
        self.moves = 0;
        self.max_tile = 0;
        self.target = TARGET_TILE;
        self.episode_id = 0;
        self.last_spawn = None;
    }

    pub fn playable(&self) -> bool {
        !self.outcome.is_terminal()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[0; GRID_SIZE]; GRID_SIZE],
            score: 0,
            outcome: Outcome::InProgress,
            can_undo: false,
            moves: 0,
            max_tile: 0,
            target: TARGET_TILE,
            episode_id: 0,
            last_spawn: None,
        }
    }
}
