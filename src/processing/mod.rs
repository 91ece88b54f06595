use thiserror::Error;

use crate::repository::RepositoryError;
use crate::storage::StorageError;

pub mod machine;
pub mod nameplate;

#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
