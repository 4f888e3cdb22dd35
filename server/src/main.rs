mod error;
mod routes;
mod settings;
mod state;

use std::process::ExitCode;

use orkitt_client::config::AppConfig;
use tracing_subscriber::EnvFilter;

use crate::error::ServerError;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "orkitt server stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ServerError> {
    let config = AppConfig::from_env()?;
    let addr = settings::listen_addr(std::env::var("PORT").ok().as_deref())?;
    tracing::info!(
        api_base = %config.public.api_base,
        devtools = config.devtools_enabled,
        compress = config.compress_public_assets,
        "configuration loaded"
    );

    let app = routes::app(state::AppState::new(config))?;
    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(%addr, "orkitt listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
