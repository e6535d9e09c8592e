//! World Clock Domain - Core types
//!
//! This crate defines the domain model for the World Clock application.
//! All types here are pure Rust with no I/O dependencies.

pub mod country;
pub mod error;
pub mod format;
pub mod screen;
pub mod settings;

pub use country::{COUNTRY_TIME_ZONES, CountryTable, ZoneLookup, parse_zone};
pub use error::{DomainError, DomainResult};
pub use format::{TimePattern, format_instant};
pub use screen::{ClockState, SelectionEvent};
pub use settings::{ClockSettings, ThemeMode};
