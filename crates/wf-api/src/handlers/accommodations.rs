//! Accommodation API handlers

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use wf_models::{NewAccommodation, UpdateAccommodation};

use crate::error::ApiResult;
use crate::extractors::{ApiJson, AppState, AuthenticatedUser, PathId};

/// GET /accommodations
pub async fn list_accommodations(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.service.accommodations().await?))
}

/// GET /accommodation/addresses
pub async fn list_accommodation_addresses(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.service.accommodation_addresses().await?))
}

/// GET /accommodation/:id
pub async fn get_accommodation(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    PathId(id): PathId,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.service.get_accommodation(id).await?))
}

/// POST /accommodation
pub async fn create_accommodation(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    ApiJson(new): ApiJson<NewAccommodation>,
) -> ApiResult<impl IntoResponse> {
    let accommodation = state.service.add_accommodation(&new).await?;
    Ok((StatusCode::CREATED, Json(accommodation)))
}

/// POST /accommodation/:id/update
pub async fn update_accommodation(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    PathId(id): PathId,
    ApiJson(update): ApiJson<UpdateAccommodation>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.service.update_accommodation(id, &update).await?))
}

/// DELETE /accommodation/:id
pub async fn delete_accommodation(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    PathId(id): PathId,
) -> ApiResult<StatusCode> {
    state.service.remove_accommodation(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
