//! Interactive loop: keys in, frames out.
//!
//! The loop blocks on terminal events; nothing happens between key presses.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::debug;

use crate::engine::{Effect, GameController, Notice, Update};
use crate::input::{handle_key_event, should_quit};
use crate::term::{FrameBuffer, GameView, StatusView, TerminalRenderer, Viewport};

/// Transient screen decorations derived from the last command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenState {
    pub won_banner: bool,
    pub message: Option<String>,
}

impl ScreenState {
    /// Fold a command's reply into what the next frame shows.
    ///
    /// The win banner and any message last until the next command.
    pub fn apply(&mut self, update: &Update) {
        self.won_banner = matches!(update.notice, Some(Notice::Won { .. }));
        self.message = match (&update.warning, update.effect) {
            (Some(warning), _) => Some(warning.clone()),
            (None, Effect::NothingToUndo) => Some("nothing to undo".to_string()),
            (None, _) => None,
        };
    }

    pub fn status(&self, high_score: u32) -> StatusView<'_> {
        StatusView {
            high_score,
            won_banner: self.won_banner,
            message: self.message.as_deref(),
        }
    }
}

/// Run until the player quits.
pub fn run(term: &mut TerminalRenderer, session: &mut impl GameController) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut screen = ScreenState::default();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let current = session.view();
        view.render_into(
            &current.snapshot,
            &screen.status(current.high_score),
            Viewport::new(w, h),
            &mut fb,
        );
        term.draw(&fb)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    let update = session.apply_action(action);
                    debug!("{} -> {:?}", action.as_str(), update.effect);
                    screen.apply(&update);
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
