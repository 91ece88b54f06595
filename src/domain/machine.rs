use serde::Serialize;

/// A machine occupying one cell of a substation grid. Text fields are empty
/// strings rather than nulls on the wire.
#[derive(Debug, Clone, Serialize)]
pub struct Machine {
    pub id: i32,
    pub substation_id: i32,
    pub position_x: i32,
    pub position_y: i32,
    pub name: String,
    pub info: String,
    pub image_path: String,
}

#[derive(Debug, Clone)]
pub struct NewMachine {
    pub substation_id: i32,
    pub position_x: i32,
    pub position_y: i32,
    pub name: String,
    pub info: String,
    pub image_path: Option<String>,
}
