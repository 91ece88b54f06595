use crate::db::{DbConnection, DbPool};
use crate::domain::machine::{Machine, NewMachine};
use crate::domain::substation::Substation;

pub mod errors;
pub mod machine;
pub mod substation;

pub use errors::{RepositoryError, RepositoryResult};

/// Repository backed by the shared SQLite connection pool.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> Result<DbConnection, RepositoryError> {
        Ok(self.pool.get()?)
    }
}

pub trait SubstationReader {
    fn list_substations(&self) -> RepositoryResult<Vec<Substation>>;
}

pub trait SubstationWriter {
    fn create_substation(&self, name: &str) -> RepositoryResult<Substation>;
}

pub trait MachineReader {
    fn get_machine(&self, machine_id: i32) -> RepositoryResult<Machine>;
    fn list_machines(&self, substation_id: i32) -> RepositoryResult<Vec<Machine>>;
    fn find_machine_at(
        &self,
        substation_id: i32,
        position_x: i32,
        position_y: i32,
    ) -> RepositoryResult<Option<Machine>>;
}

pub trait MachineWriter {
    fn create_machine(&self, machine: &NewMachine) -> RepositoryResult<i32>;
    fn update_machine_fields(
        &self,
        machine_id: i32,
        name: &str,
        info: &str,
        image_path: Option<&str>,
    ) -> RepositoryResult<usize>;
}
