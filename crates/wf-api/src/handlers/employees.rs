//! Employee API handlers

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use wf_models::{NewEmployee, UpdateEmployee};

use crate::error::ApiResult;
use crate::extractors::{ApiJson, AppState, AuthenticatedUser, PathId};

/// GET /employees
pub async fn list_employees(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.service.employees().await?))
}

/// GET /employee/:id
pub async fn get_employee(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    PathId(id): PathId,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.service.get_employee(id).await?))
}

/// POST /employee
pub async fn create_employee(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    ApiJson(new): ApiJson<NewEmployee>,
) -> ApiResult<impl IntoResponse> {
    let employee = state.service.add_employee(&new).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

/// POST /employee/:id/update
pub async fn update_employee(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    PathId(id): PathId,
    ApiJson(update): ApiJson<UpdateEmployee>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.service.update_employee(id, &update).await?))
}

/// DELETE /employee/:id
pub async fn delete_employee(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    PathId(id): PathId,
) -> ApiResult<StatusCode> {
    state.service.remove_employee(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
