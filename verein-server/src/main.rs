use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use verein_server::config::ServerConfig;
use verein_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let app = verein_server::app(AppState::new());

    let listener = tokio::net::TcpListener::bind(config.addr())
        .await
        .with_context(|| format!("cannot bind {}", config.addr()))?;
    info!(addr = %config.addr(), "verein-server listening");

    axum::serve(listener, app).await.context("server failed")?;
    Ok(())
}
