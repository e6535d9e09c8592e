//! UI Bridge Module
//!
//! Adapters that let the application use cases drive the Slint windows.

use slint::ComponentHandle;
use tracing::warn;
use worldclock_application::ports::{ClockDisplay, Navigator};

use crate::{MainWindow, SplashWindow};

/// Writes the clock label of the main window.
#[derive(Clone)]
pub struct LabelDisplay {
    window: slint::Weak<MainWindow>,
}

impl LabelDisplay {
    /// Creates a display bound to `window`.
    #[must_use]
    pub const fn new(window: slint::Weak<MainWindow>) -> Self {
        Self { window }
    }
}

impl ClockDisplay for LabelDisplay {
    fn show(&self, text: &str) {
        if let Some(ui) = self.window.upgrade() {
            ui.set_time_text(text.into());
        }
    }
}

/// Swaps the splash window for the main window.
#[derive(Clone)]
pub struct WindowNavigator {
    splash: slint::Weak<SplashWindow>,
    main: slint::Weak<MainWindow>,
}

impl WindowNavigator {
    /// Creates a navigator over both windows.
    #[must_use]
    pub const fn new(splash: slint::Weak<SplashWindow>, main: slint::Weak<MainWindow>) -> Self {
        Self { splash, main }
    }
}

impl Navigator for WindowNavigator {
    fn open_main_screen(&self) {
        if let Some(main) = self.main.upgrade()
            && let Err(e) = main.show()
        {
            warn!("Failed to show main window: {e}");
        }
    }

    fn close_launch_screen(&self) {
        if let Some(splash) = self.splash.upgrade()
            && let Err(e) = splash.hide()
        {
            warn!("Failed to hide launch window: {e}");
        }
    }
}
