//! HTTP server for the Benefits Engine.

use anyhow::Context;
use benefits_engine::api::{AppState, create_router};
use benefits_engine::config::{ConfigLoader, ServerConfig};
use benefits_engine::repository::InMemoryEmployeeRepository;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let server_config = ServerConfig::from_env()?;

    let benefits = match &server_config.benefits_config_path {
        Some(path) => ConfigLoader::load(path)
            .with_context(|| format!("loading benefits configuration from {}", path.display()))?,
        None => {
            tracing::info!("BENEFITS_CONFIG not set, using reference benefit cost rules");
            ConfigLoader::default()
        }
    };

    let repository =
        InMemoryEmployeeRepository::with_sample_data().context("loading sample employees")?;
    tracing::info!(employees = repository.len(), "Employee repository ready");

    let router = create_router(AppState::new(repository, benefits.into_config()));

    let listener = TcpListener::bind(server_config.listen_addr)
        .await
        .with_context(|| format!("binding {}", server_config.listen_addr))?;
    tracing::info!(addr = %server_config.listen_addr, "benefits server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutting down");
        })
        .await?;

    Ok(())
}
