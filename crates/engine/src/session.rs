//! Shared session state.

use std::sync::{Arc, Mutex, MutexGuard};

use log::info;

use crate::core::GameState;
use crate::error::EngineError;
use crate::types::GameAction;

/// Everything both threads touch: the game plus the run flag
#[derive(Debug)]
pub struct Session {
    pub game: GameState,
    /// Cleared by `Quit`; both loops exit once they observe it
    pub running: bool,
}

/// The single lock both threads go through
pub type SharedSession = Arc<Mutex<Session>>;

impl Session {
    /// Start a fresh game seeded with `seed`
    pub fn new(seed: u32) -> Self {
        let mut game = GameState::new(seed);
        game.start();
        info!("session started (seed {})", seed);
        Self {
            game,
            running: true,
        }
    }

    pub fn shared(seed: u32) -> SharedSession {
        Arc::new(Mutex::new(Self::new(seed)))
    }

    /// Apply one decoded command
    ///
    /// `Quit` only clears the run flag; everything else goes to the game.
    pub fn apply(&mut self, action: GameAction) -> bool {
        if action == GameAction::Quit {
            if self.running {
                info!(
                    "quit requested (score={} lines={} level={})",
                    self.game.score(),
                    self.game.lines(),
                    self.game.level()
                );
            }
            self.running = false;
            return true;
        }
        self.game.apply_action(action)
    }
}

/// Acquire the session lock, mapping poisoning to [`EngineError::Poisoned`]
pub fn lock(shared: &SharedSession) -> Result<MutexGuard<'_, Session>, EngineError> {
    shared.lock().map_err(|_| EngineError::Poisoned)
}

/// Clear the run flag so both loops wind down
///
/// A poisoned lock is still written through, since stopping is the only
/// sensible thing left to do with it.
pub fn stop(shared: &SharedSession) {
    let mut guard = match shared.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    guard.running = false;
}
