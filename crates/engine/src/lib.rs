//! Controller layer: connects a game to an input layer and a view.
//!
//! - [`session`]: the [`GameController`] command surface and its [`Session`] implementation
//! - [`store`]: the [`HighScoreStore`] persistence seam
//!
//! Nothing here depends on a terminal or GUI toolkit; a bot or a test can drive
//! a [`Session`] exactly like the terminal front end does.

pub mod session;
pub mod store;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use session::{Effect, GameController, Notice, Session, SessionView, Update};
pub use store::{HighScoreStore, MemoryHighScoreStore};
