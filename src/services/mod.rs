//! Service layer: use-case orchestration over the pure domain core.

pub mod applications;

use thiserror::Error;

use crate::export::ExportError;
use crate::repository::errors::RepositoryError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Entity not found")]
    NotFound,

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            other => ServiceError::Repository(other.to_string()),
        }
    }
}

impl From<ExportError> for ServiceError {
    fn from(err: ExportError) -> Self {
        ServiceError::Export(err.to_string())
    }
}
