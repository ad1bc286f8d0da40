//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget toolkits and instead renders into a simple framebuffer
//! that is flushed to the terminal with crossterm.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep drawing pure: [`GameView`] maps a snapshot to a [`FrameBuffer`] with no I/O
//! - Only touch the terminal in [`TerminalRenderer`], which sends changed cells only

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{tile_colors, GameView, StatusView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
