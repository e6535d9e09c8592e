//! Tokio scheduler adapter
//!
//! Runs timer callbacks as local tasks, so it must be used from inside a
//! [`tokio::task::LocalSet`] on a current-thread runtime. Every callback
//! runs on that one thread and ticks of a single timer never overlap.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use worldclock_application::ports::{CancellationToken, Scheduler, TimerHandle};

/// Scheduler backed by tokio timers.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

impl TokioScheduler {
    /// Creates a new tokio scheduler.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// Handle to a timer running on a [`TokioScheduler`].
#[derive(Debug)]
pub struct TokioTimer {
    token: CancellationToken,
    task: JoinHandle<()>,
}

impl TimerHandle for TokioTimer {
    fn cancel(&self) {
        self.token.cancel();
        self.task.abort();
    }

    fn is_active(&self) -> bool {
        !self.token.is_cancelled() && !self.task.is_finished()
    }
}

impl Scheduler for TokioScheduler {
    type Handle = TokioTimer;

    fn schedule_once(&self, delay: Duration, task: impl FnOnce() + 'static) -> TokioTimer {
        let token = CancellationToken::new();
        let guard = token.clone();
        let deadline = Instant::now() + delay;
        let task = tokio::task::spawn_local(async move {
            tokio::time::sleep_until(deadline).await;
            if !guard.is_cancelled() {
                task();
            }
        });
        TokioTimer { token, task }
    }

    fn schedule_repeating(
        &self,
        period: Duration,
        mut task: impl FnMut() + 'static,
    ) -> TokioTimer {
        let token = CancellationToken::new();
        let guard = token.clone();
        let start = Instant::now() + period;
        let task = tokio::task::spawn_local(async move {
            let mut interval = tokio::time::interval_at(start, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if guard.is_cancelled() {
                    break;
                }
                task();
            }
        });
        TokioTimer { token, task }
    }
}
