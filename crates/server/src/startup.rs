use axum::Router;
use common::utils::logging::init_logging;
use configs::AppConfig;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes;
use crate::state::ServerState;
use service::runtime;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!(event = "shutdown_signal", "received Ctrl+C, shutting down");
    }
}

/// Public entry: load config, init logging, then serve
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    let cfg = AppConfig::load_and_validate()?;
    init_logging(cfg.logging.format);
    serve(cfg).await
}

/// Build the app from an already loaded config and serve until Ctrl+C
pub async fn serve(cfg: AppConfig) -> anyhow::Result<()> {
    let db = runtime::prepare_database(&cfg.database).await?;
    let state = ServerState::new(db);

    let app: Router = routes::build_router(state, build_cors());

    let addr = cfg.server.bind_addr()?;
    info!(%addr, event = "listening", "starting pizzeria api");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
