//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and exposes
//! the terminal as an engine [`KeySource`](tetrominos_engine::KeySource).
//! Key bindings are fixed.

pub mod keys;
pub mod map;

pub use tetrominos_types as types;

pub use keys::TerminalKeys;
pub use map::map_key;
