use thiserror::Error;

use crate::modules::apartments::core::errors::DomainError;
use crate::modules::apartments::core::ports::RepositoryError;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("domain rejected: {0}")]
    Domain(#[from] DomainError),

    #[error("apartment {0} not found")]
    ApartmentNotFound(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
