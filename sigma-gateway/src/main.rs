//! Entry point for the `sigma-gateway` HTTP server.

use std::sync::Arc;

use sigma_fetcher::{BatchFetcher, RandomOrgSource, UpstreamConfig, API_KEY_VAR};
use sigma_gateway::{config::GatewayConfig, routes::create_router};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = GatewayConfig::from_env();
    let upstream = UpstreamConfig::from_env();
    if upstream.api_key.is_none() {
        warn!(var = API_KEY_VAR, "random.org API key not set; every batch will fail");
    }

    let source = match RandomOrgSource::new(upstream) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "failed to build upstream client");
            std::process::exit(1);
        }
    };
    let app = create_router(Arc::new(BatchFetcher::new(source)));

    let listener = match tokio::net::TcpListener::bind(&config.listen_addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(addr = %config.listen_addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    info!(addr = %config.listen_addr, "sigma-gateway listening");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
