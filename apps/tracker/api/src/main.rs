use axum_helpers::server::create_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    let state = AppState::new(config);
    let app = api::app(&state)?;

    info!(
        "Starting {} v{} (intake titles capped at {} chars)",
        state.config.app.name,
        state.config.app.version,
        state.config.intake.title_max_chars
    );

    create_app(app, &state.config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Tracker API shutdown complete");
    Ok(())
}
