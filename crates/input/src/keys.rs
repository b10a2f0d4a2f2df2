//! Terminal key source for the engine's input thread.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};
use tetrominos_engine::KeySource;

use crate::map::map_key;
use crate::types::{GameAction, POLL_INTERVAL_MS};

/// Reads key events from the terminal (raw mode is the renderer's job)
///
/// Each read waits at most `timeout`, so the input thread checks the run flag
/// regularly even when no key is pressed.
#[derive(Debug, Clone, Copy)]
pub struct TerminalKeys {
    timeout: Duration,
}

impl TerminalKeys {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for TerminalKeys {
    fn default() -> Self {
        Self::new(Duration::from_millis(POLL_INTERVAL_MS))
    }
}

impl KeySource for TerminalKeys {
    fn next_action(&mut self) -> Result<Option<GameAction>> {
        if !event::poll(self.timeout)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) => Ok(map_key(key)),
            _ => Ok(None),
        }
    }
}
