//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{decimal_width, CellStyle, FrameBuffer, Rgb};
use crate::types::{Outcome, GRID_SIZE};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Session-level information shown next to the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusView<'a> {
    pub high_score: u32,
    /// Show the "you win" banner (until the player's next command).
    pub won_banner: bool,
    /// One-line message for the bottom row (e.g. a save failure).
    pub message: Option<&'a str>,
}

const BOARD_BG: Rgb = Rgb::hex(0xbbada0);
const EMPTY_TILE: Rgb = Rgb::hex(0xcdc1b4);
const TITLE_FG: Rgb = Rgb::hex(0x3f51b5);
const BEST_FG: Rgb = Rgb::hex(0xe91e63);
const DARK_TEXT: Rgb = Rgb::hex(0x000000);
const LIGHT_TEXT: Rgb = Rgb::hex(0xffffff);

/// Background and text colour for a tile value.
///
/// Values above 8192 reuse the 8192 colours.
pub fn tile_colors(value: u32) -> (Rgb, Rgb) {
    let bg = match value {
        0 => EMPTY_TILE,
        2 => Rgb::hex(0xfce4ec),
        4 => Rgb::hex(0xf8bbd0),
        8 => Rgb::hex(0xf48fb1),
        16 => Rgb::hex(0xf06292),
        32 => Rgb::hex(0xec407a),
        64 => Rgb::hex(0xe91e63),
        128 => Rgb::hex(0xc2185b),
        256 => Rgb::hex(0xad1457),
        512 => Rgb::hex(0x880e4f),
        1024 => Rgb::hex(0x6a1b9a),
        2048 => Rgb::hex(0x4527a0),
        4096 => Rgb::hex(0x311b92),
        _ => Rgb::hex(0x1a237e),
    };
    let fg = if value <= 16 { DARK_TEXT } else { LIGHT_TEXT };
    (bg, fg)
}

/// A terminal renderer for the 2048 grid.
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
    /// Gutter between tiles (columns, rows).
    gap_x: u16,
    gap_y: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 tiles fit six digits and look roughly square in most fonts.
        Self {
            cell_w: 7,
            cell_h: 3,
            gap_x: 1,
            gap_y: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w,
            cell_h,
            ..Self::default()
        }
    }

    /// Outer size of the bordered grid, in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        let n = GRID_SIZE as u16;
        let w = n * self.cell_w + (n + 1) * self.gap_x + 2;
        let h = n * self.cell_h + (n + 1) * self.gap_y + 2;
        (w, h)
    }

    /// Render the current game into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is only resized when
    /// the viewport changes.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        status: &StatusView<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let board = CellStyle::new(BOARD_BG, BOARD_BG);

        fb.fill_rect(start_x + 1, start_y + 1, frame_w - 2, frame_h - 2, ' ', board);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for (row, values) in snap.grid.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                let fresh = snap.last_spawn == Some((row, col));
                self.draw_tile(fb, start_x, start_y, row as u16, col as u16, value, fresh);
            }
        }

        self.draw_side_panel(fb, snap, status, viewport, start_x, start_y, frame_w);

        if snap.outcome == Outcome::Lost {
            self.draw_overlay(fb, start_x, start_y, frame_w, frame_h, "GAME OVER", "r: new game");
        } else if status.won_banner {
            self.draw_overlay(fb, start_x, start_y, frame_w, frame_h, "YOU WIN!", "keep going?");
        }

        if let Some(message) = status.message {
            let style = CellStyle::new(Rgb::new(255, 200, 80), Rgb::new(0, 0, 0));
            fb.put_str(0, viewport.height.saturating_sub(1), message, style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, status: &StatusView<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, status, viewport, &mut fb);
        fb
    }

    /// Top-left corner of tile (row, col).
    fn tile_origin(&self, start_x: u16, start_y: u16, row: u16, col: u16) -> (u16, u16) {
        let x = start_x + 1 + self.gap_x + col * (self.cell_w + self.gap_x);
        let y = start_y + 1 + self.gap_y + row * (self.cell_h + self.gap_y);
        (x, y)
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        row: u16,
        col: u16,
        value: u32,
        fresh: bool,
    ) {
        let (bg, fg) = tile_colors(value);
        let (x, y) = self.tile_origin(start_x, start_y, row, col);
        let fill = CellStyle::new(fg, bg);
        fb.fill_rect(x, y, self.cell_w, self.cell_h, ' ', fill);

        if value == 0 {
            return;
        }

        let text = if fresh { fill.dim() } else { fill.bold() };
        let digits = decimal_width(value);
        let tx = x + self.cell_w.saturating_sub(digits) / 2;
        let ty = y + self.cell_h / 2;
        fb.put_u32(tx, ty, value, text);
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        status: &StatusView<'_>,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let title = CellStyle::new(TITLE_FG, Rgb::new(0, 0, 0)).bold();
        let label = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
        let value = CellStyle::default();
        let best = CellStyle::new(BEST_FG, Rgb::new(0, 0, 0)).bold();
        let help = CellStyle::default().dim();

        let mut y = start_y;
        fb.put_u32(panel_x, y, snap.target, title);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "BEST", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, status.high_score, best);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MOVES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.moves, value);
        y = y.saturating_add(2);

        let keys: [(&str, &str); 4] = [
            ("arrows", "move"),
            (if snap.can_undo { "u" } else { "-" }, "undo"),
            ("r", "new game"),
            ("q", "quit"),
        ];
        for (key, what) in keys {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, key, label);
            fb.put_str(panel_x + 7, y, what, help);
            y = y.saturating_add(1);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        headline: &str,
        hint: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        let hint_style = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        for (dy, text, style) in [(0u16, headline, style), (1, hint, hint_style)] {
            let text_w = text.chars().count() as u16;
            let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
            fb.put_str(x, mid_y.saturating_add(dy), text, style);
        }
    }
}
