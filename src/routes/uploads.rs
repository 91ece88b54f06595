use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::routes::{ApiError, AppState};

/// Serves a stored nameplate photo by file name.
pub async fn serve(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Response, ApiError> {
    if !is_safe_filename(&filename) {
        return Err(ApiError::NotFound);
    }

    let path = state.store.resolve(&filename);
    let bytes = tokio::fs::read(&path).await.map_err(|_| ApiError::NotFound)?;

    Ok(([(header::CONTENT_TYPE, "image/jpeg")], bytes).into_response())
}

/// Uploaded files live in a flat directory; anything that could traverse out
/// of it is treated as absent.
fn is_safe_filename(filename: &str) -> bool {
    !filename.is_empty()
        && !filename.contains('/')
        && !filename.contains('\\')
        && !filename.contains("..")
}
