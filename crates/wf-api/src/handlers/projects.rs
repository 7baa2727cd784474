//! Project API handlers

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use wf_models::{NewProject, UpdateProject};

use crate::error::ApiResult;
use crate::extractors::{ApiJson, AppState, AuthenticatedUser, PathId};

/// GET /projects
pub async fn list_projects(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.service.projects().await?))
}

/// GET /project/names
pub async fn list_project_names(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.service.project_names().await?))
}

/// GET /project/:id
pub async fn get_project(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    PathId(id): PathId,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.service.get_project(id).await?))
}

/// POST /project
pub async fn create_project(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    ApiJson(new): ApiJson<NewProject>,
) -> ApiResult<impl IntoResponse> {
    let project = state.service.add_project(&new).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// POST /project/:id/update
pub async fn update_project(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    PathId(id): PathId,
    ApiJson(update): ApiJson<UpdateProject>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.service.update_project(id, &update).await?))
}

/// DELETE /project/:id
///
/// Also removes the project's accommodations and cars.
pub async fn delete_project(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    PathId(id): PathId,
) -> ApiResult<StatusCode> {
    state.service.remove_project(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
