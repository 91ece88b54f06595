use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Substation {
    pub id: i32,
    pub name: String,
}
