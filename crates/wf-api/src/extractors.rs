//! Axum extractors for API handlers

use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRef, FromRequest, FromRequestParts, Path, Request},
    http::{header::AUTHORIZATION, request::Parts},
    Json,
};
use serde::de::DeserializeOwned;
use wf_auth::{extract_bearer_token, Claims};
use wf_core::Id;
use wf_services::WorkforceService;

use crate::error::ApiError;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<WorkforceService>,
}

impl AppState {
    pub fn new(service: WorkforceService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

/// Caller identified by a valid bearer token
#[derive(Debug)]
pub struct AuthenticatedUser(pub Claims);

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(extract_bearer_token)
            .ok_or_else(|| ApiError::unauthorized("Authentication required"))?;

        let claims = app_state.service.jwt().validate_token(token).map_err(|e| {
            tracing::warn!(error = %e, "Rejected bearer token");
            ApiError::unauthorized(e.to_string())
        })?;

        Ok(AuthenticatedUser(claims))
    }
}

impl std::ops::Deref for AuthenticatedUser {
    type Target = Claims;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// JSON body whose decode failures answer 400
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(ApiJson(value))
    }
}

/// Numeric `:id` path segment; anything else answers 400
pub struct PathId(pub Id);

#[async_trait]
impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<Id>::from_request_parts(parts, state).await?;
        Ok(PathId(id))
    }
}
