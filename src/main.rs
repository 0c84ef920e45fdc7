//! Component Gallery - Main Entry Point

use component_gallery::app::application::run_app;
use component_gallery::config::GalleryConfig;

fn main() {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Component Gallery...");

    let loaded = GalleryConfig::load_or_default();

    // Run the GPUI application
    run_app(loaded);
}
