//! CardioHub Web Server
//!
//! Run with: cargo run -p cardiohub-web

use std::net::SocketAddr;

use cardiohub_common::AppConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = AppConfig::load()?;
    info!("Starting CardioHub web server...");
    info!("Gene dataset: {}", config.dataset.path.display());

    let addr: SocketAddr = config.bind_addr().parse()?;
    let state = cardiohub_web::state::AppState::new(config);
    let app = cardiohub_web::router::build_router(state);

    info!("Server listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
