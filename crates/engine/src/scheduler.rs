//! Gravity scheduler.
//!
//! The scheduler owns no game state. Each [`Scheduler::poll`] takes the lock
//! once, reads the current gravity interval (it depends on shared flags and
//! the speed tier), fires at most one tick, and copies out a snapshot when the
//! game asked for a redraw. Drawing that snapshot is left to the caller so the
//! lock is never held across terminal I/O.

use log::trace;

use crate::core::GameSnapshot;
use crate::error::EngineError;
use crate::session::{lock, SharedSession};

/// Outcome of one scheduler poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Poll {
    /// Nothing changed since the last draw
    Idle,
    /// [`Scheduler::snapshot`] holds a fresh frame to draw
    Redraw,
    /// The session was asked to quit
    Stopped,
}

#[derive(Debug, Clone)]
pub struct Scheduler {
    last_tick_ms: u64,
    snapshot: GameSnapshot,
}

impl Scheduler {
    /// Start timing from `now_ms`; the first tick fires one interval later
    pub fn new(now_ms: u64) -> Self {
        Self {
            last_tick_ms: now_ms,
            snapshot: GameSnapshot::default(),
        }
    }

    pub fn last_tick_ms(&self) -> u64 {
        self.last_tick_ms
    }

    /// Most recent frame copied out by [`Scheduler::poll`]
    pub fn snapshot(&self) -> &GameSnapshot {
        &self.snapshot
    }

    pub fn poll(&mut self, shared: &SharedSession, now_ms: u64) -> Result<Poll, EngineError> {
        let mut session = lock(shared)?;
        if !session.running {
            return Ok(Poll::Stopped);
        }

        let game = &mut session.game;
        let interval = game.gravity_interval_ms();
        if now_ms.saturating_sub(self.last_tick_ms) >= interval {
            trace!("tick after {}ms (interval {}ms)", now_ms - self.last_tick_ms, interval);
            self.last_tick_ms = now_ms;
            game.take_fast();
            game.tick();
        }

        if game.take_redraw() {
            game.snapshot_into(&mut self.snapshot);
            Ok(Poll::Redraw)
        } else {
            Ok(Poll::Idle)
        }
    }
}
