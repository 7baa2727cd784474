//! Car API handlers

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use wf_models::{NewCar, UpdateCar};

use crate::error::ApiResult;
use crate::extractors::{ApiJson, AppState, AuthenticatedUser, PathId};

/// GET /cars
pub async fn list_cars(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.service.cars().await?))
}

/// GET /car/numbers
pub async fn list_car_numbers(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.service.car_numbers().await?))
}

/// GET /car/:id
pub async fn get_car(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    PathId(id): PathId,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.service.get_car(id).await?))
}

/// POST /car
pub async fn create_car(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    ApiJson(new): ApiJson<NewCar>,
) -> ApiResult<impl IntoResponse> {
    let car = state.service.add_car(&new).await?;
    Ok((StatusCode::CREATED, Json(car)))
}

/// POST /car/:id/update
pub async fn update_car(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    PathId(id): PathId,
    ApiJson(update): ApiJson<UpdateCar>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.service.update_car(id, &update).await?))
}

/// DELETE /car/:id
pub async fn delete_car(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    PathId(id): PathId,
) -> ApiResult<StatusCode> {
    state.service.remove_car(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
