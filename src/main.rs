mod config;
mod error;
mod health_endpoint;
mod hello_endpoint;
mod test_endpoint;

use crate::config::{Config, Host};
use crate::error::ServerError;
use crate::health_endpoint::health;
use crate::hello_endpoint::hello;
use crate::test_endpoint::test_message;
use axum::routing::any;
use axum::Router;
use lambda_http::{run, Error};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn functions() -> Router {
    Router::new()
        .route("/health", any(health))
        .route("/test", any(test_message))
        .route("/hello", any(hello))
}

fn app(config: &Config) -> Router {
    match config.route_prefix.as_deref() {
        Some(prefix) => Router::new().nest(prefix, functions()),
        None => functions(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_current_span(false)
        .with_ansi(false)
        .without_time()
        .with_target(true)
        .init();

    let config = Config::from_env()?;
    let app = app(&config);

    match config.host {
        Host::Lambda => run(app).await,
        Host::CustomHandler { port } => {
            let listener = TcpListener::bind(("127.0.0.1", port))
                .await
                .map_err(|source| ServerError::Bind { port, source })?;
            info!(
                port,
                prefix = config.route_prefix.as_deref().unwrap_or("/"),
                "custom handler listening"
            );
            axum::serve(listener, app).await?;
            Ok(())
        }
    }
}
