//! Main screen state types for UI binding.
//!
//! The main screen is a small state machine:
//! - `Idle`: nothing selected, no timer, blank label
//! - `Running`: a country is selected and its clock is ticking
//!
//! Selecting a country from either state moves to `Running` for that
//! country. Teardown moves back to `Idle`.

use chrono_tz::Tz;

/// Selector event emitted by the country drop-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionEvent {
    /// The item at this index of the sorted country list was chosen.
    Selected(usize),
    /// The selector reports that nothing is selected.
    Cleared,
}

impl SelectionEvent {
    /// Creates an event from a UI combo box index.
    ///
    /// Negative indices mean "no selection".
    #[must_use]
    pub fn from_index(index: i32) -> Self {
        usize::try_from(index).map_or(Self::Cleared, Self::Selected)
    }
}

/// Current state of the main screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ClockState {
    /// No country selected yet, or the screen was torn down.
    #[default]
    Idle,

    /// The clock is ticking for a country.
    Running {
        /// Selected country name.
        country: String,
        /// Timezone the label is rendered in.
        zone: Tz,
    },
}

impl ClockState {
    /// Returns true if the clock is running.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        matches!(self, Self::Running { .. })
    }

    /// Returns the selected country, if any.
    #[must_use]
    pub fn country(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Running { country, .. } => Some(country),
        }
    }

    /// Returns the active timezone, if any.
    #[must_use]
    pub const fn zone(&self) -> Option<Tz> {
        match self {
            Self::Idle => None,
            Self::Running { zone, .. } => Some(*zone),
        }
    }
}
