//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework beyond the
//! terminal event types. It maps `crossterm` key events into
//! [`crate::types::GameAction`] and decides when the player wants to quit.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};
