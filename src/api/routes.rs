use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::handlers::{index_handler, version_handler, withdraw_handler};
use crate::wallet::WalletOps;

pub struct ApiState {
    pub wallet: Box<dyn WalletOps>,
    pub chain_id: String,
}

pub fn build_router(state: Arc<ApiState>) -> Router {
    // The dashboard is served from another origin, so CORS stays open.
    Router::new()
        .route("/", get(index_handler))
        .route("/version", get(version_handler))
        .route("/withdraw", post(withdraw_handler))
        .route("/withdraw/", post(withdraw_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn serve(addr: SocketAddr, state: Arc<ApiState>) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "wallet api listening");
    axum::serve(listener, build_router(state)).await?;
    Ok(())
}
