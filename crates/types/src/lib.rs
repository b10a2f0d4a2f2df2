//! Shared types and constants
//!
//! Pure data with no external dependencies, usable from the core rules, the
//! terminal view and the scheduler alike.
//!
//! # Board
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Cells**: one `u8` color code per cell (see [`Cell`])
//!
//! # Timing
//!
//! Gravity is expressed in frames at 60 frames per second, the way the classic
//! console tables are. A tier of 48 frames per row is 800ms per row.
//!
//! | Constant | Frames | Description |
//! |----------|--------|-------------|
//! | `FAST_DROP_FRAMES` | 1 | Interval after a soft drop request |
//! | `CLEAR_FLASH_FRAMES` | 15 | Interval while full rows are flashing |
//!
//! # Examples
//!
//! ```
//! use tetrominos_types::{Direction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::from_index(0), PieceKind::I);
//! assert_eq!(PieceKind::I.color(), 6);
//! assert_eq!(Direction::Left.dx(), -1);
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Side length of a piece's local occupancy grid
pub const SHAPE_SIZE: usize = 4;

/// Number of piece kinds
pub const PIECE_COUNT: usize = 7;

/// Frames per second used to convert frame counts into milliseconds
pub const FRAMES_PER_SECOND: u64 = 60;

/// Gravity interval (in frames) after the player asks for a soft drop
pub const FAST_DROP_FRAMES: u32 = 1;

/// Gravity interval (in frames) while full rows are flagged and flashing
pub const CLEAR_FLASH_FRAMES: u32 = 15;

/// Sleep quantum between idle loop iterations (10ms)
pub const POLL_INTERVAL_MS: u64 = 10;

/// Line clear scoring table (Classic Nintendo scoring)
///
/// Base points for clearing 1..=4 rows at once at level 0.
/// Points are multiplied by (level + 1).
pub const SCORE_PER_LINES: [u32; 4] = [40, 100, 300, 1200];

/// Lines needed per level
pub const LINES_PER_LEVEL: u32 = 10;

/// Speed tiers as `(level threshold, frames per row)`, ascending
///
/// The active tier only ever moves forward within a game.
pub const SPEED_TIERS: [(u32, u32); 15] = [
    (0, 48),
    (1, 43),
    (2, 38),
    (3, 33),
    (4, 28),
    (5, 23),
    (6, 18),
    (7, 13),
    (8, 8),
    (9, 6),
    (10, 5),
    (13, 4),
    (16, 3),
    (19, 2),
    (29, 1),
];

/// A cell on the game board
///
/// - `0`: empty
/// - `1..=7`: ANSI base color
/// - `> 7`: extended (256-color) palette index
pub type Cell = u8;

/// Empty cell value
pub const EMPTY: Cell = 0;

/// The seven tetromino kinds, in shape-table order
///
/// Each kind has a fixed color code:
/// - **I**: cyan (6)
/// - **O**: yellow (3)
/// - **T**: magenta (5)
/// - **L**: blue (4)
/// - **J**: orange (214, extended palette)
/// - **Z**: green (2)
/// - **S**: red (1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    Z,
    S,
}

impl PieceKind {
    pub const ALL: [PieceKind; PIECE_COUNT] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::Z,
        PieceKind::S,
    ];

    /// Index into the shape table
    pub fn index(&self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::L => 3,
            PieceKind::J => 4,
            PieceKind::Z => 5,
            PieceKind::S => 6,
        }
    }

    /// Kind for a shape-table index (wraps modulo 7)
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % PIECE_COUNT]
    }

    /// Color code written into the board for this kind
    pub fn color(&self) -> Cell {
        match self {
            PieceKind::I => 6,
            PieceKind::O => 3,
            PieceKind::T => 5,
            PieceKind::L => 4,
            PieceKind::J => 214,
            PieceKind::Z => 2,
            PieceKind::S => 1,
        }
    }
}

/// Horizontal move direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Column delta for one step
    pub fn dx(&self) -> i8 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// Logical commands decoded from player input
///
/// Unrecognized keys never become an action; the mapping layer returns `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// End the session
    Quit,
    /// Rotate the piece 90° clockwise
    Rotate,
    /// Request a fast gravity step
    SoftDrop,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell left
    MoveLeft,
    /// Drop to the lowest legal position and place
    HardDrop,
    /// Toggle pause state
    Pause,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_tables() {
        assert_eq!(SCORE_PER_LINES, [40, 100, 300, 1200]);
        assert_eq!(SPEED_TIERS[0], (0, 48));
        assert_eq!(SPEED_TIERS[SPEED_TIERS.len() - 1], (29, 1));
        assert_eq!(CLEAR_FLASH_FRAMES, 15);
        assert_eq!(POLL_INTERVAL_MS, 10);
    }

    #[test]
    fn speed_tiers_are_ascending() {
        for pair in SPEED_TIERS.windows(2) {
            assert!(pair[0].0 < pair[1].0);
            assert!(pair[0].1 > pair[1].1);
        }
    }

    #[test]
    fn piece_index_roundtrip() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_index(kind.index()), kind);
        }
    }

    #[test]
    fn piece_colors_are_nonzero_and_distinct() {
        let mut seen = Vec::new();
        for kind in PieceKind::ALL {
            let c = kind.color();
            assert_ne!(c, EMPTY);
            assert!(!seen.contains(&c));
            seen.push(c);
        }
    }
}
