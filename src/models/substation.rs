use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::schema::substations;

/// Database row for a substation.
#[derive(Debug, Queryable, Identifiable)]
#[diesel(table_name = substations)]
pub struct Substation {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = substations)]
pub struct NewSubstation<'a> {
    pub name: &'a str,
}

impl From<Substation> for crate::domain::substation::Substation {
    fn from(row: Substation) -> Self {
        Self {
            id: row.id,
            name: row.name,
        }
    }
}
