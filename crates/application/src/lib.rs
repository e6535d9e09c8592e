//! World Clock Application - Use cases and ports
//!
//! This crate defines the application layer with:
//! - Port traits (interfaces for clocks, timers, and the screen surfaces)
//! - The launch screen and main clock screen use cases
//! - Application-level error handling

pub mod error;
pub mod ports;
pub mod use_cases;

pub use error::{ApplicationError, ApplicationResult};
pub use ports::{CancellationToken, Clock, ClockDisplay, Navigator, Scheduler, TimerHandle};
pub use use_cases::{ClockScreen, LaunchScreen};
