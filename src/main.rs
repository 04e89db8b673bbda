use std::net::SocketAddr;

use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use dockflow::config::AppConfig;
use dockflow::shell::{http, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;
    let state = AppState::new(&config);

    let app = http::router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.bind_addr.parse()?;
    tracing::info!(%addr, log = %config.log_path, docks = config.docks.len(), "dockflow listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
