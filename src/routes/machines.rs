use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Deserialize;

use crate::domain::machine::Machine;
use crate::processing::machine::{MachinePlacement, place_machine, update_machine};
use crate::repository::MachineReader;
use crate::routes::{ApiError, AppState, decode_base64_image};

pub async fn list_for_substation(
    State(state): State<AppState>,
    Path(substation_id): Path<i32>,
) -> Result<Json<Vec<Machine>>, ApiError> {
    let machines = state.repo.list_machines(substation_id)?;
    Ok(Json(machines))
}

pub async fn get_one(
    State(state): State<AppState>,
    Path(machine_id): Path<i32>,
) -> Result<Json<Machine>, ApiError> {
    let machine = state.repo.get_machine(machine_id)?;
    Ok(Json(machine))
}

#[derive(Debug, Deserialize)]
pub struct PlaceMachineRequest {
    pub substation_id: Option<i32>,
    pub position_x: Option<i32>,
    pub position_y: Option<i32>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub info: String,
    pub image: Option<String>,
}

pub async fn create_or_update(
    State(state): State<AppState>,
    Json(request): Json<PlaceMachineRequest>,
) -> Result<(StatusCode, Json<Machine>), ApiError> {
    let (Some(substation_id), Some(position_x), Some(position_y)) = (
        request.substation_id,
        request.position_x,
        request.position_y,
    ) else {
        return Err(ApiError::BadRequest(
            "substation_id, position_x and position_y are required".to_string(),
        ));
    };

    let image = decode_optional_image(request.image.as_deref())?;

    let machine = place_machine(
        &state.repo,
        &state.store,
        MachinePlacement {
            substation_id,
            position_x,
            position_y,
            name: request.name,
            info: request.info,
            image,
        },
    )?;

    Ok((StatusCode::CREATED, Json(machine)))
}

#[derive(Debug, Deserialize)]
pub struct UpdateMachineRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub info: String,
    pub image: Option<String>,
}

pub async fn update(
    State(state): State<AppState>,
    Path(machine_id): Path<i32>,
    Json(request): Json<UpdateMachineRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let image = decode_optional_image(request.image.as_deref())?;

    update_machine(
        &state.repo,
        &state.store,
        machine_id,
        &request.name,
        &request.info,
        image.as_deref(),
    )?;

    Ok(Json(serde_json::json!({ "success": true })))
}

fn decode_optional_image(image: Option<&str>) -> Result<Option<Vec<u8>>, ApiError> {
    match image.filter(|data| !data.is_empty()) {
        Some(data) => Ok(Some(decode_base64_image(data)?)),
        None => Ok(None),
    }
}
