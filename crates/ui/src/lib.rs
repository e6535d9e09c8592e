//! World Clock UI - User interface layer
//!
//! This crate provides the Slint-based windows for the World Clock
//! application and the adapters that connect them to the use cases.

// Allow lints that trigger on Slint-generated code which we cannot control
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::uninlined_format_args)]

mod app_window;
pub mod bridge;
pub mod scheduler;

pub use app_window::{AppWindow, UiError};
pub use bridge::{LabelDisplay, WindowNavigator};
pub use scheduler::{SlintScheduler, SlintTimer};

// Include the generated Slint code
slint::include_modules!();
