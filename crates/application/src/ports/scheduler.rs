//! Timer scheduling port
//!
//! Timers fire on a single cooperative event loop, so callbacks are not
//! required to be `Send` and state shared with them lives in `Rc`/`Cell`.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// Handle to a scheduled callback.
///
/// Dropping a handle may stop the timer on some adapters, so owners keep it
/// alive for as long as the callback should run.
pub trait TimerHandle {
    /// Cancels the callback.
    ///
    /// Once this returns, the callback will not run again. Cancelling an
    /// already cancelled or finished timer does nothing.
    fn cancel(&self);

    /// Returns true while the callback may still run.
    fn is_active(&self) -> bool;
}

/// Port for scheduling callbacks on the event loop.
pub trait Scheduler {
    /// Handle type returned for every scheduled callback.
    type Handle: TimerHandle;

    /// Runs `task` once after `delay`.
    fn schedule_once(&self, delay: Duration, task: impl FnOnce() + 'static) -> Self::Handle;

    /// Runs `task` every `period`, first after one full period.
    fn schedule_repeating(&self, period: Duration, task: impl FnMut() + 'static)
    -> Self::Handle;
}

/// Shared cancellation flag for scheduler implementations.
///
/// Adapters check [`CancellationToken::is_cancelled`] immediately before
/// invoking a callback, which makes cancellation synchronous even when the
/// underlying timer primitive stops asynchronously.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Rc<Cell<bool>>,
}

impl CancellationToken {
    /// Creates a new, uncancelled token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the token as cancelled.
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    /// Returns true once [`cancel`](Self::cancel) was called on any clone.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}
