//! Application window management
//!
//! This module owns both windows and wires them to the launch and clock
//! screen use cases.

use std::cell::RefCell;
use std::rc::Rc;

use slint::{CloseRequestResponse, ComponentHandle, ModelRc, SharedString, VecModel};
use tracing::info;
use worldclock_application::{ApplicationError, ClockScreen, LaunchScreen};
use worldclock_domain::{ClockSettings, SelectionEvent};
use worldclock_infrastructure::SystemClock;

use crate::bridge::{LabelDisplay, WindowNavigator};
use crate::scheduler::SlintScheduler;
use crate::{MainWindow, SplashWindow};

type MainScreen = ClockScreen<SlintScheduler, SystemClock, LabelDisplay>;

/// Errors raised while building or running the windows.
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    /// The windowing backend failed.
    #[error("platform error: {0}")]
    Platform(#[from] slint::PlatformError),

    /// The screen logic rejected its configuration.
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

/// Application window wrapper with use case bindings.
pub struct AppWindow {
    splash: SplashWindow,
    main: MainWindow,
    launch: LaunchScreen<SlintScheduler, WindowNavigator>,
    screen: Rc<RefCell<MainScreen>>,
}

impl AppWindow {
    /// Creates the launch and main windows.
    ///
    /// The main window is built up front with its country list bound but
    /// stays hidden until the launch delay elapses.
    ///
    /// # Errors
    ///
    /// Returns an error if a window cannot be created or the settings are
    /// invalid.
    pub fn new(settings: ClockSettings) -> Result<Self, UiError> {
        let splash = SplashWindow::new()?;
        let main = MainWindow::new()?;

        let dark = settings.theme.is_dark();
        splash.set_dark_mode(dark);
        main.set_dark_mode(dark);

        let navigator = Rc::new(WindowNavigator::new(splash.as_weak(), main.as_weak()));
        let launch = LaunchScreen::new(SlintScheduler, navigator, &settings);

        let display = Rc::new(LabelDisplay::new(main.as_weak()));
        let clock = Rc::new(SystemClock::new());
        let screen = ClockScreen::new(SlintScheduler, clock, display, settings)?;

        let countries: Vec<SharedString> = screen
            .countries()
            .iter()
            .map(|name| SharedString::from(*name))
            .collect();
        main.set_countries(ModelRc::new(VecModel::from(countries)));
        main.set_time_text(SharedString::new());

        let screen = Rc::new(RefCell::new(screen));

        let screen_select = Rc::clone(&screen);
        main.on_country_selected(move |index| {
            screen_select
                .borrow_mut()
                .handle_event(SelectionEvent::from_index(index));
        });

        let screen_close = Rc::clone(&screen);
        main.window().on_close_requested(move || {
            screen_close.borrow_mut().teardown();
            CloseRequestResponse::HideWindow
        });

        Ok(Self {
            splash,
            main,
            launch,
            screen,
        })
    }

    /// Shows the launch window and runs the event loop.
    ///
    /// This method blocks until the last window is closed.
    ///
    /// # Errors
    ///
    /// Returns an error if the event loop fails.
    pub fn run(&mut self) -> Result<(), UiError> {
        self.splash.show()?;
        self.launch.activate();

        slint::run_event_loop()?;

        self.screen.borrow_mut().teardown();
        info!("Event loop finished");
        Ok(())
    }

    /// Returns a reference to the main Slint window.
    #[must_use]
    pub const fn window(&self) -> &MainWindow {
        &self.main
    }
}
