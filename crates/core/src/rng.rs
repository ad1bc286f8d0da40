//! RNG module - random tile spawning
//!
//! New tiles land in a uniformly random empty cell and are a 2 with probability 0.9
//! or a 4 with probability 0.1. Every function takes the random source explicitly,
//! so a seeded `StdRng` reproduces a whole game.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::Board;
use crate::types::SPAWN_FOUR_PROBABILITY;

/// Deterministic RNG for the given seed.
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Draw the value of a newly spawned tile (2 or 4).
pub fn tile_value<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    if rng.gen_bool(SPAWN_FOUR_PROBABILITY) {
        4
    } else {
        2
    }
}

/// Place one new tile in a random empty cell.
///
/// Returns the flat index and value of the spawned tile, or `None` when the
/// board has no empty cell (the board is left untouched).
pub fn spawn_tile<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) -> Option<(usize, u32)> {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return None;
    }

    let idx = empty[rng.gen_range(0..empty.len())];
    let value = tile_value(rng);
    board.set_index(idx, value);
    Some((idx, value))
}
