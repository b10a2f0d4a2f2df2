//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the game rules and state. It has **no dependencies** on
//! terminal I/O or threading, which keeps it:
//!
//! - **Deterministic**: same seed produces identical games
//! - **Testable**: every rule is reachable from plain unit tests
//! - **Portable**: the scheduler and the view only see [`GameState`] and [`GameSnapshot`]
//!
//! # Module Structure
//!
//! - [`pieces`]: shape table, in-place quarter turns, the active [`Piece`]
//! - [`board`]: 10x20 color grid with collision tests and pending-row compaction
//! - [`game_state`]: transitions (spawn, move, rotate, drops, placement, clears)
//! - [`scoring`]: line-clear points, level and the speed-tier ratchet
//! - [`rng`]: small seedable LCG for uniform piece selection
//! - [`snapshot`]: plain copy of what the renderer needs
//!
//! # Game Rules
//!
//! - Pieces enter fully above the board at a random column and orientation
//! - Rotation has no wall kicks: a blocked rotation is simply rejected
//! - Full rows flash for one slow gravity step before they are removed
//! - A piece that settles with cells above a filled top row restarts the game
//!
//! # Example
//!
//! ```
//! use tetrominos_core::GameState;
//! use tetrominos_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert!(game.active().is_some() || game.board().has_pending_rows());
//! ```

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use tetrominos_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::GameState;
pub use pieces::{bounding_box, rotate_right_90, BoundingBox, Piece, Shape};
pub use rng::SimpleRng;
pub use scoring::{advance_speed_tier, frames_to_ms, level_for_lines, line_clear_score};
pub use snapshot::GameSnapshot;
