//! Startup errors for the hosting shell.

use std::net::SocketAddr;

use orkitt_client::config::ConfigError;

/// Errors that stop the server before or while serving.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("PORT must be a port number, got {0:?}")]
    InvalidPort(String),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}
