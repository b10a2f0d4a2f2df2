//! Monotonic time source for the scheduler.

use std::time::Instant;

/// Milliseconds since an arbitrary fixed origin, never decreasing
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// [`Clock`] over `std::time::Instant`, with its origin at construction
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}
