//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external systems.
//! Each port is a trait that can be implemented by adapters in the infrastructure
//! or UI layer.

mod clock;
mod display;
mod scheduler;

pub use clock::Clock;
pub use display::{ClockDisplay, Navigator};
pub use scheduler::{CancellationToken, Scheduler, TimerHandle};
