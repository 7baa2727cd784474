use axum::{extract::State, response::IntoResponse, Json};
use wf_models::LoginRequest;

use crate::error::ApiResult;
use crate::extractors::{ApiJson, AppState};

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.service.login(&request).await?))
}
