//! REST API server for card validation.
//!
//! # Usage
//!
//! ```bash
//! # Start server on 0.0.0.0:8080
//! valid-cards-server
//!
//! # With custom port
//! valid-cards-server --port 3000
//! PORT=3000 HOST=127.0.0.1 valid-cards-server
//!
//! # Validate a card
//! curl -X POST localhost:8080/ \
//!     -H 'Content-Type: application/json' \
//!     -d '{"card_number": "5512789002271854", "expiration_month": "12", "expiration_year": "2030"}'
//! ```
//!
//! # Swagger UI
//!
//! Visit http://localhost:8080/swagger-ui/ for interactive API documentation.

mod config;

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use valid_cards::{server, SystemClock};

use config::ServerConfig;

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;
    let app = server::router(Arc::new(SystemClock));

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Starting server on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}:{}/swagger-ui/", "localhost", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
