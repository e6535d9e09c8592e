//! Clock Settings Domain Model
//!
//! Defines the tunable parameters of the World Clock application.

use std::time::Duration;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::country::parse_zone;
use crate::error::{DomainError, DomainResult};
use crate::format::TimePattern;

/// Theme mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light mode theme.
    Light,
    /// Dark mode theme (default).
    #[default]
    Dark,
}

impl ThemeMode {
    /// Returns true if dark mode should be used.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// Settings for the launch and main screens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockSettings {
    /// How long the launch screen stays up, in milliseconds.
    #[serde(default = "default_splash_delay_ms")]
    pub splash_delay_ms: u64,

    /// Clock refresh period, in milliseconds.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    /// Zone used when a country has no table entry.
    #[serde(default = "default_fallback_zone")]
    pub fallback_zone: String,

    /// Label pattern.
    #[serde(default)]
    pub time_pattern: TimePattern,

    /// Theme mode preference.
    #[serde(default)]
    pub theme: ThemeMode,
}

const fn default_splash_delay_ms() -> u64 {
    2000
}

const fn default_tick_interval_ms() -> u64 {
    1000
}

fn default_fallback_zone() -> String {
    "GMT".to_string()
}

impl Default for ClockSettings {
    fn default() -> Self {
        Self {
            splash_delay_ms: default_splash_delay_ms(),
            tick_interval_ms: default_tick_interval_ms(),
            fallback_zone: default_fallback_zone(),
            time_pattern: TimePattern::default(),
            theme: ThemeMode::default(),
        }
    }
}

impl ClockSettings {
    /// Launch screen delay.
    #[must_use]
    pub const fn splash_delay(&self) -> Duration {
        Duration::from_millis(self.splash_delay_ms)
    }

    /// Clock refresh period.
    #[must_use]
    pub const fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Parsed fallback zone, or GMT if the configured one is unknown.
    #[must_use]
    pub fn fallback(&self) -> Tz {
        parse_zone(&self.fallback_zone).unwrap_or(Tz::GMT)
    }

    /// Checks that all values are usable.
    ///
    /// # Errors
    ///
    /// Returns an error if the tick interval is zero or the fallback zone
    /// is not a known identifier.
    pub fn validate(&self) -> DomainResult<()> {
        if self.tick_interval_ms == 0 {
            return Err(DomainError::InvalidSetting(
                "tick_interval_ms must be greater than zero".to_string(),
            ));
        }
        parse_zone(&self.fallback_zone)?;
        Ok(())
    }
}
