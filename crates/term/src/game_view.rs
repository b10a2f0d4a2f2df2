//! GameView: paints a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, Color, FrameBuffer};
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, EMPTY};

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

/// Palette index used for every filled cell of a row waiting to be cleared
pub const CLEAR_HIGHLIGHT: u8 = 7;

const BORDER: CellStyle = CellStyle::new(Color::Reset, Color::Reset);
const LABEL: CellStyle = CellStyle::new(Color::Reset, Color::Reset).bold();
const VALUE: CellStyle = CellStyle::new(Color::Reset, Color::Reset);
const OVERLAY: CellStyle = CellStyle::new(Color::Indexed(15), Color::Indexed(0)).bold();

/// Side panel rows, relative to the top of the frame
const PANEL_ROWS: [&str; 3] = ["Level:", "Score:", "Lines:"];

/// Centered, framed board with a side panel to its right.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    /// Terminal column and row of the frame's top-left corner.
    pub fn frame_origin(&self, viewport: Viewport) -> (u16, u16) {
        let (frame_w, frame_h) = self.frame_size();
        (
            viewport.width.saturating_sub(frame_w) / 2,
            viewport.height.saturating_sub(frame_h) / 2,
        )
    }

    /// Frame size including the border.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            (BOARD_WIDTH as u16) * self.cell_w + 2,
            BOARD_HEIGHT as u16 + 2,
        )
    }

    /// Render into an existing framebuffer.
    ///
    /// Callers can reuse one framebuffer across frames; it is only resized
    /// when the viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let (frame_w, frame_h) = self.frame_size();
        let (start_x, start_y) = self.frame_origin(viewport);

        self.draw_border(fb, start_x, start_y, frame_w, frame_h);

        for (y, row) in snap.board.iter().enumerate() {
            let pending = snap.is_pending(y);
            for (x, &color) in row.iter().enumerate() {
                if color == EMPTY {
                    continue;
                }
                let paint = if pending { CLEAR_HIGHLIGHT } else { color };
                let style = CellStyle::new(Color::Reset, Color::Indexed(paint));
                let px = start_x + 1 + x as u16 * self.cell_w;
                fb.fill_rect(px, start_y + 1 + y as u16, self.cell_w, 1, ' ', style);
            }
        }

        self.draw_side_panel(fb, snap, start_x + frame_w + 2, start_y + 1);

        if snap.paused {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, " PAUSED ");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        fb.put_char(x, y, '┌', BORDER);
        fb.put_char(x + w - 1, y, '┐', BORDER);
        fb.put_char(x, y + h - 1, '└', BORDER);
        fb.put_char(x + w - 1, y + h - 1, '┘', BORDER);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', BORDER);
            fb.put_char(x + dx, y + h - 1, '─', BORDER);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', BORDER);
            fb.put_char(x + w - 1, y + dy, '│', BORDER);
        }
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, y: u16) {
        let values = [snap.level, snap.score, snap.lines];
        for (i, (label, value)) in PANEL_ROWS.iter().zip(values).enumerate() {
            let row = y + 2 * i as u16;
            let end = fb.put_str(x, row, label, LABEL);
            fb.put_u32(end + 1, row, value, VALUE);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        fb.put_str(x, mid_y, text, OVERLAY);
    }
}
