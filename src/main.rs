//! AHP Compare server binary.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use tokio::sync::watch;

use ahp_compare::adapters::http::{app_router, AnalysisAppState};
use ahp_compare::adapters::storage::InMemorySessionRepository;
use ahp_compare::application::SessionSweeper;
use ahp_compare::config::{AppConfig, ServerConfig};
use ahp_compare::ports::AnalysisSessionRepository;

/// `RUST_LOG` wins over the configured filter; JSON output in production.
fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    if server.is_production() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
    tracing::info!("shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.server);

    let repository: Arc<dyn AnalysisSessionRepository> = Arc::new(InMemorySessionRepository::new());

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let sweeper = SessionSweeper::new(repository.clone(), config.analysis.sweeper());
    let sweeper_handle = tokio::spawn(async move { sweeper.run(shutdown_rx).await });

    let state = AnalysisAppState::new(repository, config.analysis.engine());
    let app = app_router(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        consistency_policy = ?config.analysis.consistency_policy,
        session_idle_ttl_secs = config.analysis.session_idle_ttl_secs,
        "ahp-compare listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Receiver only goes away if the sweeper already stopped.
    let _ = shutdown_tx.send(true);
    sweeper_handle.await?;
    Ok(())
}
