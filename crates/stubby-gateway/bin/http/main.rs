mod cli;

use crate::cli::Cli;
use clap::Parser;
use std::sync::Arc;
use stubby_gateway::{App, AppState};
use stubby_generator::RandomGenerator;
use stubby_shortener::ShortenerService;
use stubby_storage::{InMemoryUrlStore, UrlStore};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Cli::parse();

    stubby_telemetry::init(&config.telemetry())?;

    info!(
        listen_addr = %config.listen_addr,
        public_base_url = %config.public_base_url,
        log_format = %config.log_format,
        "starting stubby gateway"
    );

    let store = Arc::new(InMemoryUrlStore::new());
    let service =
        ShortenerService::from_shared(Arc::clone(&store), Arc::new(RandomGenerator::new()));
    let state = AppState::new(Arc::new(service), config.public_base_url);

    let listener = TcpListener::bind(config.listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "listening");

    axum::serve(listener, App::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!(entries = store.len(), "gateway stopped, discarding in-memory store");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
