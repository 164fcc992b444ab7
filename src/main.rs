use anyhow::Context;
use autos_api_rust::{
    build_app,
    config::{Config, StoreBackend},
    constants::API_NAME,
    repository::{AutomobileRepository, InMemoryAutomobileRepository, PgAutomobileRepository},
    service::AutosService,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("{} Starting Autos API server on port {}", API_NAME, config.server_port);

    let repository = build_repository(&config).await?;
    let service = AutosService::new(repository);
    let app = build_app(service);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    tracing::info!("{} Server listening on {}", API_NAME, addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("{} Server stopped", API_NAME);
    Ok(())
}

async fn build_repository(config: &Config) -> anyhow::Result<Arc<dyn AutomobileRepository>> {
    match config.store {
        StoreBackend::Memory => {
            tracing::warn!("{} Using in-memory store; records are lost on exit", API_NAME);
            Ok(Arc::new(InMemoryAutomobileRepository::new()))
        }
        StoreBackend::Postgres => {
            let pool = PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(&config.database_url)
                .await
                .context("Failed to connect to database")?;

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to run migrations")?;

            tracing::info!("{} Connected to database", API_NAME);
            Ok(Arc::new(PgAutomobileRepository::new(pool)))
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("{} Failed to listen for shutdown signal: {}", API_NAME, e);
        std::future::pending::<()>().await;
    }
    tracing::info!("{} Shutdown signal received", API_NAME);
}
