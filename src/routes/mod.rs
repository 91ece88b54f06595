//! HTTP surface of the mapper service.

use std::sync::Arc;

use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use base64::Engine;
use serde::Serialize;
use thiserror::Error;

use crate::processing::ProcessingError;
use crate::recognition::{EngineStatus, RecognitionError, RecognizerHandle};
use crate::repository::{DieselRepository, RepositoryError};
use crate::storage::ImageStore;

pub mod machines;
pub mod recognition;
pub mod substations;
pub mod uploads;

/// Largest accepted request body; nameplate photos arrive base64-encoded
/// inside JSON.
pub const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub repo: DieselRepository,
    pub store: ImageStore,
    pub recognizer: Arc<RecognizerHandle>,
}

impl AppState {
    pub fn new(repo: DieselRepository, store: ImageStore, recognizer: RecognizerHandle) -> Self {
        Self {
            repo,
            store,
            recognizer: Arc::new(recognizer),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route(
            "/api/substations",
            get(substations::list).post(substations::create),
        )
        .route(
            "/api/substations/:substation_id/machines",
            get(machines::list_for_substation),
        )
        .route("/api/machines", post(machines::create_or_update))
        .route(
            "/api/machines/:machine_id",
            get(machines::get_one).put(machines::update),
        )
        .route("/api/ocr", post(recognition::recognize))
        .route("/uploads/:filename", get(uploads::serve))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    recognizer: EngineStatus,
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        recognizer: state.recognizer.status().await,
    })
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("not found")]
    NotFound,
    #[error("{0}")]
    Conflict(String),
    #[error("recognition engine is unavailable")]
    EngineUnavailable,
    #[error("internal error")]
    Internal,
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ApiError::NotFound,
            RepositoryError::Conflict(message) => ApiError::Conflict(message),
            err => {
                log::error!("Repository error: {err}");
                ApiError::Internal
            }
        }
    }
}

impl From<ProcessingError> for ApiError {
    fn from(err: ProcessingError) -> Self {
        match err {
            ProcessingError::Repository(err) => err.into(),
            ProcessingError::Storage(err) => {
                log::error!("Storage error: {err}");
                ApiError::Internal
            }
        }
    }
}

impl From<RecognitionError> for ApiError {
    fn from(err: RecognitionError) -> Self {
        match err {
            RecognitionError::Unavailable => ApiError::EngineUnavailable,
            RecognitionError::Backend(message) => {
                log::error!("Recognition backend error: {message}");
                ApiError::Internal
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::EngineUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

/// Decodes a base64 image payload, tolerating a `data:...;base64,` prefix.
pub(crate) fn decode_base64_image(data: &str) -> Result<Vec<u8>, ApiError> {
    let payload = match data.split_once(',') {
        Some((_, payload)) => payload,
        None => data,
    };
    base64::engine::general_purpose::STANDARD
        .decode(payload.trim())
        .map_err(|err| ApiError::BadRequest(format!("invalid base64 image: {err}")))
}
