//! Adapters implementing application ports.

mod system_clock;
mod tokio_scheduler;

pub use system_clock::SystemClock;
pub use tokio_scheduler::{TokioScheduler, TokioTimer};
