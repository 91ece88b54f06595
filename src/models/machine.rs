use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::schema::machines;

/// Database row for a machine placed on the substation grid.
#[derive(Debug, Queryable, Identifiable)]
#[diesel(table_name = machines)]
pub struct Machine {
    pub id: i32,
    pub substation_id: i32,
    pub position_x: i32,
    pub position_y: i32,
    pub name: Option<String>,
    pub info: Option<String>,
    pub image_path: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = machines)]
pub struct NewMachine<'a> {
    pub substation_id: i32,
    pub position_x: i32,
    pub position_y: i32,
    pub name: &'a str,
    pub info: &'a str,
    pub image_path: Option<&'a str>,
}

impl From<Machine> for crate::domain::machine::Machine {
    fn from(row: Machine) -> Self {
        Self {
            id: row.id,
            substation_id: row.substation_id,
            position_x: row.position_x,
            position_y: row.position_y,
            name: row.name.unwrap_or_default(),
            info: row.info.unwrap_or_default(),
            image_path: row.image_path.unwrap_or_default(),
        }
    }
}

impl<'a> From<&'a crate::domain::machine::NewMachine> for NewMachine<'a> {
    fn from(machine: &'a crate::domain::machine::NewMachine) -> Self {
        Self {
            substation_id: machine.substation_id,
            position_x: machine.position_x,
            position_y: machine.position_y,
            name: &machine.name,
            info: &machine.info,
            image_path: machine.image_path.as_deref(),
        }
    }
}
