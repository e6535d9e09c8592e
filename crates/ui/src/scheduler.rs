//! Slint timer scheduler
//!
//! Callbacks run on the Slint event loop thread, between UI events.

use std::time::Duration;

use slint::{Timer, TimerMode};
use worldclock_application::ports::{CancellationToken, Scheduler, TimerHandle};

/// Scheduler backed by `slint::Timer`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlintScheduler;

/// Handle to a running `slint::Timer`.
///
/// Dropping the handle stops the timer.
pub struct SlintTimer {
    token: CancellationToken,
    timer: Timer,
}

impl TimerHandle for SlintTimer {
    fn cancel(&self) {
        self.token.cancel();
        self.timer.stop();
    }

    fn is_active(&self) -> bool {
        !self.token.is_cancelled() && self.timer.running()
    }
}

impl Scheduler for SlintScheduler {
    type Handle = SlintTimer;

    fn schedule_once(&self, delay: Duration, task: impl FnOnce() + 'static) -> SlintTimer {
        let token = CancellationToken::new();
        let guard = token.clone();
        let mut task = Some(task);
        let timer = Timer::default();
        timer.start(TimerMode::SingleShot, delay, move || {
            if guard.is_cancelled() {
                return;
            }
            if let Some(task) = task.take() {
                task();
            }
        });
        SlintTimer { token, timer }
    }

    fn schedule_repeating(
        &self,
        period: Duration,
        mut task: impl FnMut() + 'static,
    ) -> SlintTimer {
        let token = CancellationToken::new();
        let guard = token.clone();
        let timer = Timer::default();
        timer.start(TimerMode::Repeated, period, move || {
            if !guard.is_cancelled() {
                task();
            }
        });
        SlintTimer { token, timer }
    }
}
