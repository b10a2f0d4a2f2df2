//! Engine: runs one game across a scheduler thread and an input thread.
//!
//! Both threads share a single [`Session`] behind one mutex. Every game
//! transition happens inside one lock acquisition; blocking reads, drawing and
//! sleeps all happen outside it.
//!
//! - [`scheduler`]: decides when gravity fires, from a [`Clock`] reading
//! - [`driver`]: the two loops plus the [`KeySource`] and [`Frontend`] seams
//! - [`session`]: the shared state and its lock helper

pub mod clock;
pub mod driver;
pub mod error;
pub mod scheduler;
pub mod session;

pub use tetrominos_core as core;
pub use tetrominos_types as types;

pub use clock::{Clock, MonotonicClock};
pub use driver::{run_input, run_scheduler, spawn_input_thread, Frontend, KeySource};
pub use error::EngineError;
pub use scheduler::{Poll, Scheduler};
pub use session::{lock, stop, Session, SharedSession};
