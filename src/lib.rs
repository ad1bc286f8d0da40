//! 2048 in the terminal (workspace facade crate).
//!
//! The game itself lives in dedicated crates under `crates/`; this package
//! re-exports them as `tui_2048::{core,engine,input,persist,term,types}` and
//! adds the runtime [`config`] and the interactive [`app`] loop.

pub mod app;
pub mod config;

pub use tui_2048_core as core;
pub use tui_2048_engine as engine;
pub use tui_2048_input as input;
pub use tui_2048_persist as persist;
pub use tui_2048_term as term;
pub use tui_2048_types as types;
