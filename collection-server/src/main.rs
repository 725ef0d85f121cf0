use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use collection_server::config::{ConfigError, ServerConfig};
use collection_server::dataset::{DatasetError, load_schedule};
use collection_server::web::{AppState, create_router};

/// Errors that stop the server before or while serving.
#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("dataset: {0}")]
    Dataset(#[from] DatasetError),

    #[error("server: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config = ServerConfig::from_env()?;

    // The dataset is read once; anything malformed stops startup
    info!(path = %config.data_path.display(), "loading schedule");
    let schedule = load_schedule(&config.data_path)?;
    info!(
        days = schedule.len(),
        routes = schedule.route_count(),
        stops = schedule.stop_count(),
        "schedule loaded"
    );

    let state = AppState::new(schedule);
    let app = create_router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!("Collection schedule listening on http://{}", config.addr);
    info!("  GET  /              - Schedule page");
    info!("  GET  /api/schedule  - Filtered schedule (JSON)");
    info!("  GET  /api/routes    - Route names (JSON)");
    info!("  GET  /health        - Health check");

    axum::serve(listener, app).await?;
    Ok(())
}
