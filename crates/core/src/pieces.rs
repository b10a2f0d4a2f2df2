//! Pieces module - tetromino shapes and quarter-turn rotation
//!
//! Every kind is a 4x4 occupancy grid. Orientation is not stored as an enum:
//! the grid itself is turned in place, so a piece's shape is always one of the
//! four quarter turns of its canonical grid.

use crate::rng::SimpleRng;
use crate::types::{Cell, PieceKind, BOARD_WIDTH, PIECE_COUNT, SHAPE_SIZE};

/// 4x4 occupancy grid, indexed `[row][col]`
pub type Shape = [[bool; SHAPE_SIZE]; SHAPE_SIZE];

const fn grid(bits: [[u8; SHAPE_SIZE]; SHAPE_SIZE]) -> Shape {
    let mut out = [[false; SHAPE_SIZE]; SHAPE_SIZE];
    let mut r = 0;
    while r < SHAPE_SIZE {
        let mut c = 0;
        while c < SHAPE_SIZE {
            out[r][c] = bits[r][c] != 0;
            c += 1;
        }
        r += 1;
    }
    out
}

/// Canonical shapes, indexed by [`PieceKind::index`]
pub const SHAPES: [Shape; PIECE_COUNT] = [
    // I
    grid([[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]]),
    // O
    grid([[0, 0, 0, 0], [0, 1, 1, 0], [0, 1, 1, 0], [0, 0, 0, 0]]),
    // T
    grid([[0, 0, 1, 0], [0, 1, 1, 0], [0, 0, 1, 0], [0, 0, 0, 0]]),
    // L
    grid([[0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 1, 0], [0, 0, 0, 0]]),
    // J
    grid([[0, 0, 1, 0], [0, 0, 1, 0], [0, 1, 1, 0], [0, 0, 0, 0]]),
    // Z
    grid([[0, 0, 1, 0], [0, 1, 1, 0], [0, 1, 0, 0], [0, 0, 0, 0]]),
    // S
    grid([[0, 1, 0, 0], [0, 1, 1, 0], [0, 0, 1, 0], [0, 0, 0, 0]]),
];

/// Canonical (unrotated) shape for a kind
pub fn get_shape(kind: PieceKind) -> Shape {
    SHAPES[kind.index()]
}

/// Turn a 4x4 grid 90° clockwise in place
///
/// Works ring by ring, cycling four cells at a time.
pub fn rotate_right_90(shape: &mut Shape) {
    let n = SHAPE_SIZE - 1;
    for i in 0..SHAPE_SIZE / 2 {
        for j in i..n - i {
            let tmp = shape[i][j];
            shape[i][j] = shape[n - j][i];
            shape[n - j][i] = shape[n - i][n - j];
            shape[n - i][n - j] = shape[j][n - i];
            shape[j][n - i] = tmp;
        }
    }
}

/// The four quarter turns of a kind, starting from the canonical grid
pub fn shape_rotations(kind: PieceKind) -> [Shape; 4] {
    let mut out = [get_shape(kind); 4];
    for i in 1..4 {
        out[i] = out[i - 1];
        rotate_right_90(&mut out[i]);
    }
    out
}

/// Local `(row, col)` of every occupied cell, row-major
pub fn occupied(shape: &Shape) -> impl Iterator<Item = (usize, usize)> + '_ {
    (0..SHAPE_SIZE).flat_map(move |r| {
        (0..SHAPE_SIZE)
            .filter(move |&c| shape[r][c])
            .map(move |c| (r, c))
    })
}

/// Inclusive bounds of the occupied cells of a shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoundingBox {
    pub min_row: usize,
    pub max_row: usize,
    pub min_col: usize,
    pub max_col: usize,
}

impl BoundingBox {
    pub fn width(&self) -> usize {
        self.max_col - self.min_col + 1
    }

    pub fn height(&self) -> usize {
        self.max_row - self.min_row + 1
    }
}

/// Bounding box of a shape, `None` when nothing is occupied
pub fn bounding_box(shape: &Shape) -> Option<BoundingBox> {
    let mut cells = occupied(shape);
    let (r0, c0) = cells.next()?;
    let mut bb = BoundingBox {
        min_row: r0,
        max_row: r0,
        min_col: c0,
        max_col: c0,
    };
    for (r, c) in cells {
        bb.min_row = bb.min_row.min(r);
        bb.max_row = bb.max_row.max(r);
        bb.min_col = bb.min_col.min(c);
        bb.max_col = bb.max_col.max(c);
    }
    Some(bb)
}

/// Active falling piece
///
/// `(x, y)` is the board position of the grid's top-left cell. `y` is negative
/// while the piece is still entering from above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Cell,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece of `kind` turned `quarter_turns` times, anchored at `(x, y)`
    pub fn new(kind: PieceKind, quarter_turns: u8, x: i8, y: i8) -> Self {
        let mut shape = get_shape(kind);
        for _ in 0..quarter_turns % 4 {
            rotate_right_90(&mut shape);
        }
        Self {
            kind,
            color: kind.color(),
            shape,
            x,
            y,
        }
    }

    /// Draw a random piece placed entirely above row 0
    ///
    /// Kind, orientation and column are each uniform. The column is chosen so
    /// the occupied span fits inside the board.
    pub fn spawn(rng: &mut SimpleRng) -> Self {
        let kind = PieceKind::from_index(rng.next_range(PIECE_COUNT as u32) as usize);
        let turns = rng.next_range(4) as u8;
        let mut piece = Self::new(kind, turns, 0, 0);

        let bb = bounding_box(&piece.shape).unwrap_or_default();
        let span = (bb.max_col - bb.min_col) as u32;
        piece.x = rng.next_range(BOARD_WIDTH as u32 - span) as i8 - bb.min_col as i8;
        piece.y = -(bb.min_row as i8) - (bb.max_row - bb.min_row) as i8 - 1;
        piece
    }

    /// Board coordinates `(x, y)` of every occupied cell
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        occupied(&self.shape).map(move |(r, c)| (self.x + c as i8, self.y + r as i8))
    }

    /// Copy moved by `(dx, dy)`
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Copy turned 90° clockwise around the same anchor
    pub fn rotated(&self) -> Self {
        let mut next = *self;
        rotate_right_90(&mut next.shape);
        next
    }

    pub fn bounding_box(&self) -> Option<BoundingBox> {
        bounding_box(&self.shape)
    }
}
