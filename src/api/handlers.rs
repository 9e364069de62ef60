use axum::extract::State;
use axum::http::StatusCode;
use axum::{Form, Json};
use std::sync::Arc;
use tracing::info;

use crate::api::models::{ErrorResponse, StatusResponse, VersionResponse, WithdrawRequest, WithdrawResponse};
use crate::api::routes::ApiState;
use crate::config;

pub async fn index_handler(State(state): State<Arc<ApiState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "online".to_string(),
        address: state.wallet.address().to_string(),
    })
}

pub async fn version_handler(State(state): State<Arc<ApiState>>) -> Json<VersionResponse> {
    Json(VersionResponse {
        version: config::version().to_string(),
        commit: config::commit().to_string(),
        chain_id: state.chain_id.clone(),
    })
}

pub async fn withdraw_handler(
    State(state): State<Arc<ApiState>>,
    Form(request): Form<WithdrawRequest>,
) -> Result<Json<WithdrawResponse>, (StatusCode, Json<ErrorResponse>)> {
    info!(to_address = %request.to_address, amount = %request.amount, "withdrawing");

    match state.wallet.send(&request.to_address, &request.amount).await {
        Ok(receipt) => Ok(Json(WithdrawResponse { response: receipt })),
        Err(err) => Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: err.to_string(),
            }),
        )),
    }
}
