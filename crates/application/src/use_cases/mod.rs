//! Application use cases (screen logic orchestration).

mod clock_screen;
mod launch_screen;
#[cfg(test)]
mod test_support;

pub use clock_screen::ClockScreen;
pub use launch_screen::LaunchScreen;
