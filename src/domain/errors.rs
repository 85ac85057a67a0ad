// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("malformed row: {0}")]
    MalformedRow(String),
    #[error("remote error: {0}")]
    Remote(String),
}
