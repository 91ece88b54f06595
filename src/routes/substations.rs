use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use crate::domain::substation::Substation;
use crate::repository::{RepositoryError, SubstationReader, SubstationWriter};
use crate::routes::{ApiError, AppState};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Substation>>, ApiError> {
    let substations = state.repo.list_substations()?;
    Ok(Json(substations))
}

#[derive(Debug, Deserialize)]
pub struct CreateSubstationRequest {
    pub name: Option<String>,
}

pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateSubstationRequest>,
) -> Result<(StatusCode, Json<Substation>), ApiError> {
    let name = request
        .name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ApiError::BadRequest("substation name must not be empty".to_string()))?;

    let substation = state.repo.create_substation(name).map_err(|err| match err {
        RepositoryError::Conflict(_) => {
            ApiError::Conflict("substation name already exists".to_string())
        }
        err => err.into(),
    })?;

    Ok((StatusCode::CREATED, Json(substation)))
}
