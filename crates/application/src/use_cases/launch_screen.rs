//! Launch screen use case

use std::rc::Rc;
use std::time::Duration;

use tracing::info;
use worldclock_domain::ClockSettings;

use crate::ports::{Navigator, Scheduler, TimerHandle};

/// Shows the splash view for a fixed delay, then hands over to the main screen.
pub struct LaunchScreen<S: Scheduler, N: Navigator + 'static> {
    scheduler: S,
    navigator: Rc<N>,
    delay: Duration,
    timer: Option<S::Handle>,
}

impl<S: Scheduler, N: Navigator + 'static> LaunchScreen<S, N> {
    /// Creates a new `LaunchScreen` use case.
    pub fn new(scheduler: S, navigator: Rc<N>, settings: &ClockSettings) -> Self {
        Self {
            scheduler,
            navigator,
            delay: settings.splash_delay(),
            timer: None,
        }
    }

    /// Starts the one-shot handover timer.
    ///
    /// When it fires the main screen is opened and the launch screen closed,
    /// exactly once. Calling this again while the timer exists does nothing.
    pub fn activate(&mut self) {
        if self.timer.is_some() {
            return;
        }

        info!(delay = ?self.delay, "Launch screen shown");
        let navigator = Rc::clone(&self.navigator);
        let handle = self.scheduler.schedule_once(self.delay, move || {
            info!("Launch delay elapsed, opening main screen");
            navigator.open_main_screen();
            navigator.close_launch_screen();
        });
        self.timer = Some(handle);
    }

    /// Returns true while the handover has not happened yet.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.timer.as_ref().is_some_and(TimerHandle::is_active)
    }
}
