//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the game view paints a snapshot
//! into a plain framebuffer, and the terminal renderer flushes that buffer with
//! `crossterm`, redrawing only the runs that changed since the last frame.
//!
//! - Board cells are 2 columns wide to make up for the terminal glyph aspect
//! - Colors are 256-color palette indices, matching the board's color codes

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tetrominos_core as core;
pub use tetrominos_types as types;

pub use fb::{Cell, CellStyle, Color, FrameBuffer};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
