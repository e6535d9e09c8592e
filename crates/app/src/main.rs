//! World Clock - Main Entry Point
//!
//! This is the desktop application entry point that initializes logging,
//! loads settings and starts the UI event loop.

use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use worldclock_domain::ClockSettings;
use worldclock_infrastructure::SettingsRepository;
use worldclock_ui::AppWindow;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting World Clock v{}", env!("CARGO_PKG_VERSION"));

    let settings = load_settings()?;

    // Initialize the application windows
    let mut app = AppWindow::new(settings)?;

    // Run the event loop (blocks until the last window closes)
    app.run()?;

    Ok(())
}

/// Loads settings, falling back to defaults when the file is unusable.
fn load_settings() -> Result<ClockSettings, std::io::Error> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let repo = SettingsRepository::new();
    let settings = rt.block_on(repo.load()).unwrap_or_else(|e| {
        warn!("Ignoring settings file: {e}");
        ClockSettings::default()
    });
    Ok(settings)
}
