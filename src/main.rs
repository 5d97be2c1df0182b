//! Accessibility overlay demo
//!
//! Main entry point for the application.

use a11y_overlay::config::{self, AppConfig};
use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, reload, util::SubscriberInitExt, EnvFilter};

mod app;

fn main() -> anyhow::Result<()> {
    // Log from the start with RUST_LOG or the default filter, so config
    // loading is visible, then switch to the configured filter.
    let env_filter = EnvFilter::try_from_default_env().ok();
    let from_env = env_filter.is_some();
    let (filter, filter_handle) = reload::Layer::new(
        env_filter.unwrap_or_else(|| EnvFilter::new(config::DEFAULT_LOG_FILTER)),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting a11y-overlay v{}", env!("CARGO_PKG_VERSION"));

    let config = config::load_config().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config: {}, using defaults", e);
        AppConfig::default()
    });

    if !from_env {
        if let Err(e) = filter_handle.reload(EnvFilter::new(&config.log_filter)) {
            tracing::warn!("Failed to apply log filter {:?}: {}", config.log_filter, e);
        }
    }

    // AccessKit is enabled by default in eframe, so screen readers see the panel controls
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Accessible Landing Page"),
        ..Default::default()
    };

    eframe::run_native(
        "a11y-overlay",
        options,
        Box::new(move |cc| Ok(Box::new(app::OverlayApp::new(cc, &config)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {e}"))
}
