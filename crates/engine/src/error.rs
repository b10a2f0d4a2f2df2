use thiserror::Error;

/// Failures of the threaded runtime itself (the game rules never fail)
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("game state lock poisoned by a panicked thread")]
    Poisoned,

    #[error("input thread panicked")]
    InputPanicked,
}
