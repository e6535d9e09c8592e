//! Main screen use case: country selector and ticking clock label.

use std::rc::Rc;

use chrono_tz::Tz;
use tracing::{debug, trace};
use worldclock_domain::{ClockSettings, ClockState, CountryTable, SelectionEvent, format_instant};

use crate::ApplicationResult;
use crate::ports::{Clock, ClockDisplay, Scheduler, TimerHandle};

/// Drives the clock label for the selected country.
///
/// At most one repeating timer exists at any time. Every new selection
/// cancels the previous timer before starting its own, and teardown (or
/// drop) cancels whatever is running.
pub struct ClockScreen<S: Scheduler, C: Clock + 'static, D: ClockDisplay + 'static> {
    table: &'static CountryTable,
    scheduler: S,
    clock: Rc<C>,
    display: Rc<D>,
    settings: ClockSettings,
    fallback: Tz,
    state: ClockState,
    active: Option<S::Handle>,
}

impl<S: Scheduler, C: Clock + 'static, D: ClockDisplay + 'static> ClockScreen<S, C, D> {
    /// Creates the screen over the process-wide country table.
    ///
    /// The screen starts idle: nothing is selected and the label is not
    /// written until the first selection.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings fail validation.
    pub fn new(
        scheduler: S,
        clock: Rc<C>,
        display: Rc<D>,
        settings: ClockSettings,
    ) -> ApplicationResult<Self> {
        Self::with_table(CountryTable::global(), scheduler, clock, display, settings)
    }

    /// Creates the screen over a custom country table.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings fail validation.
    pub fn with_table(
        table: &'static CountryTable,
        scheduler: S,
        clock: Rc<C>,
        display: Rc<D>,
        settings: ClockSettings,
    ) -> ApplicationResult<Self> {
        settings.validate()?;
        let fallback = settings.fallback();
        Ok(Self {
            table,
            scheduler,
            clock,
            display,
            settings,
            fallback,
            state: ClockState::Idle,
            active: None,
        })
    }

    /// Sorted country names for the selector.
    #[must_use]
    pub fn countries(&self) -> &[&'static str] {
        self.table.country_names()
    }

    /// Current screen state.
    #[must_use]
    pub const fn state(&self) -> &ClockState {
        &self.state
    }

    /// Returns true if a tick timer is scheduled.
    #[must_use]
    pub fn has_active_timer(&self) -> bool {
        self.active.as_ref().is_some_and(TimerHandle::is_active)
    }

    /// Handles a selector event.
    pub fn handle_event(&mut self, event: SelectionEvent) {
        match event {
            SelectionEvent::Selected(index) => match self.table.name_at(index) {
                Some(country) => self.select_country(country),
                None => debug!(index, "Ignoring out-of-range selection"),
            },
            SelectionEvent::Cleared => {}
        }
    }

    /// Starts the clock for `country`, replacing any running clock.
    ///
    /// Unknown countries are shown in the fallback zone.
    pub fn select_country(&mut self, country: &str) {
        let lookup = self.table.resolve_or(country, self.fallback);
        if lookup.is_fallback() {
            debug!(country, zone = %self.fallback, "Country not in table, using fallback zone");
        }
        let zone = lookup.zone();

        self.cancel_timer();

        let clock = Rc::clone(&self.clock);
        let display = Rc::clone(&self.display);
        let pattern = self.settings.time_pattern;
        let render = move || {
            let text = format_instant(clock.now(), zone, pattern);
            trace!(%text, "Clock tick");
            display.show(&text);
        };

        // First update is immediate, then one per period.
        render();
        let handle = self
            .scheduler
            .schedule_repeating(self.settings.tick_interval(), render);

        debug!(country, %zone, "Clock started");
        self.active = Some(handle);
        self.state = ClockState::Running {
            country: country.to_string(),
            zone,
        };
    }

    /// Stops the clock and returns to idle.
    pub fn teardown(&mut self) {
        self.cancel_timer();
        self.state = ClockState::Idle;
    }

    fn cancel_timer(&mut self) {
        if let Some(handle) = self.active.take() {
            handle.cancel();
        }
    }
}

impl<S: Scheduler, C: Clock + 'static, D: ClockDisplay + 'static> Drop for ClockScreen<S, C, D> {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}
