use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// Everything the renderer needs for one redraw, copied out under the lock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    /// Rows flagged as full; drawn with a neutral highlight
    pub pending: [bool; BOARD_HEIGHT as usize],
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub paused: bool,
}

impl GameSnapshot {
    pub fn is_pending(&self, y: usize) -> bool {
        self.pending.get(y).copied().unwrap_or(false)
    }
}
