//! The scheduler loop and the input loop.
//!
//! Locking discipline:
//! - one transition per lock acquisition
//! - no lock held across [`KeySource::next_action`], [`Frontend::draw`] or a sleep
//!
//! Either loop failing clears the run flag so the other one winds down too.

use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::Result;
use log::{debug, info};

use crate::clock::Clock;
use crate::core::GameSnapshot;
use crate::scheduler::{Poll, Scheduler};
use crate::session::{lock, stop, SharedSession};
use crate::types::{GameAction, POLL_INTERVAL_MS};

/// Source of decoded player commands
///
/// `next_action` may block, but should return `Ok(None)` now and then when
/// nothing arrives so the input loop can notice a quit from elsewhere.
pub trait KeySource {
    fn next_action(&mut self) -> Result<Option<GameAction>>;
}

/// Where finished frames go
pub trait Frontend {
    fn draw(&mut self, snapshot: &GameSnapshot) -> Result<()>;
}

/// Commands sent over a channel
///
/// A disconnected sender reads as `Quit`.
impl KeySource for Receiver<GameAction> {
    fn next_action(&mut self) -> Result<Option<GameAction>> {
        match self.recv_timeout(Duration::from_millis(POLL_INTERVAL_MS)) {
            Ok(action) => Ok(Some(action)),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => Ok(Some(GameAction::Quit)),
        }
    }
}

/// Drive gravity and drawing until the session stops
pub fn run_scheduler<C, F>(
    shared: &SharedSession,
    clock: &C,
    frontend: &mut F,
    quantum: Duration,
) -> Result<()>
where
    C: Clock + ?Sized,
    F: Frontend + ?Sized,
{
    let result = scheduler_loop(shared, clock, frontend, quantum);
    if result.is_err() {
        stop(shared);
    }
    result
}

fn scheduler_loop<C, F>(
    shared: &SharedSession,
    clock: &C,
    frontend: &mut F,
    quantum: Duration,
) -> Result<()>
where
    C: Clock + ?Sized,
    F: Frontend + ?Sized,
{
    let mut scheduler = Scheduler::new(clock.now_ms());
    loop {
        match scheduler.poll(shared, clock.now_ms())? {
            Poll::Stopped => break,
            Poll::Redraw => frontend.draw(scheduler.snapshot())?,
            Poll::Idle => {}
        }
        thread::sleep(quantum);
    }
    info!("scheduler loop exited");
    Ok(())
}

/// Read commands and apply them one lock at a time until the session stops
pub fn run_input<K>(shared: &SharedSession, source: &mut K, quantum: Duration) -> Result<()>
where
    K: KeySource + ?Sized,
{
    let result = input_loop(shared, source, quantum);
    if result.is_err() {
        stop(shared);
    }
    result
}

fn input_loop<K>(shared: &SharedSession, source: &mut K, quantum: Duration) -> Result<()>
where
    K: KeySource + ?Sized,
{
    loop {
        if !lock(shared)?.running {
            break;
        }

        match source.next_action()? {
            Some(action) => {
                let mut session = lock(shared)?;
                let changed = session.apply(action);
                debug!("input {:?} applied={}", action, changed);
                if !session.running {
                    break;
                }
            }
            None => thread::sleep(quantum),
        }
    }
    info!("input loop exited");
    Ok(())
}

/// Run [`run_input`] on its own named thread
///
/// The caller joins the handle before tearing down the terminal.
pub fn spawn_input_thread<K>(
    shared: &SharedSession,
    mut source: K,
    quantum: Duration,
) -> Result<JoinHandle<Result<()>>>
where
    K: KeySource + Send + 'static,
{
    let shared = Arc::clone(shared);
    let handle = thread::Builder::new()
        .name("input".into())
        .spawn(move || run_input(&shared, &mut source, quantum))?;
    Ok(handle)
}
