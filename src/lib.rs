//! Terminal falling-block game (workspace facade crate).
//!
//! Re-exports the workspace crates as `tetrominos::{core,engine,input,term,types}`
//! so the binary, integration tests and benches share one import path.

pub use tetrominos_core as core;
pub use tetrominos_engine as engine;
pub use tetrominos_input as input;
pub use tetrominos_term as term;
pub use tetrominos_types as types;
