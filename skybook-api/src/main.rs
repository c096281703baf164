use anyhow::Context;
use skybook_api::{app, config::Config, worker, AppState};
use skybook_catalog::{PricingEngine, StaticFlightCatalog};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skybook_api=debug,skybook_order=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Starting Skybook API on port {}", config.server.port);

    let state = AppState::new(
        Arc::new(StaticFlightCatalog::new()),
        PricingEngine::new(config.pricing.clone()),
    );

    tokio::spawn(worker::start_session_sweeper(
        state.sessions.clone(),
        config.sessions.idle_timeout(),
        config.sessions.sweep_interval(),
    ));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app(state)).await.context("Server error")?;

    Ok(())
}
