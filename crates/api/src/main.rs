use std::sync::Arc;

use anyhow::Context;

use merchstock_api::{app::services::AppServices, config::ApiConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    merchstock_observability::init();

    let config = ApiConfig::from_env()?;
    let services = Arc::new(AppServices::seeded());
    let app = merchstock_api::app::build_app(services);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("http server failed")?;
    Ok(())
}
