use axum::{extract::State, response::IntoResponse, Json};

use crate::error::ApiResult;
use crate::extractors::{AppState, AuthenticatedUser};

/// GET /dashboard
pub async fn get_dashboard(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.service.dashboard().await?))
}
