//! Screen surface ports

/// Port for the clock label on the main screen.
pub trait ClockDisplay {
    /// Replaces the label text.
    fn show(&self, text: &str);
}

/// Port for moving between screens.
pub trait Navigator {
    /// Opens the main clock screen.
    fn open_main_screen(&self);

    /// Closes the launch screen. It cannot be returned to.
    fn close_launch_screen(&self);
}
