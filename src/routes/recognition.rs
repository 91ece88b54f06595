use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::domain::nameplate::Classification;
use crate::processing::nameplate::classify;
use crate::routes::{ApiError, AppState, decode_base64_image};

#[derive(Debug, Deserialize)]
pub struct RecognizeRequest {
    pub image: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RecognizeResponse {
    pub success: bool,
    #[serde(flatten)]
    pub classification: Classification,
}

/// Runs the recognizer over an uploaded nameplate photo and classifies the
/// result into name/info fields.
pub async fn recognize(
    State(state): State<AppState>,
    Json(request): Json<RecognizeRequest>,
) -> Result<Json<RecognizeResponse>, ApiError> {
    let encoded = request
        .image
        .as_deref()
        .filter(|data| !data.is_empty())
        .ok_or_else(|| ApiError::BadRequest("no image data supplied".to_string()))?;

    let bytes = decode_base64_image(encoded)?;
    let image = image::load_from_memory(&bytes)
        .map_err(|err| ApiError::BadRequest(format!("cannot decode image: {err}")))?;

    let hits = state.recognizer.recognize(&image).await?;
    let classification = classify(&hits);

    Ok(Json(RecognizeResponse {
        success: true,
        classification,
    }))
}
