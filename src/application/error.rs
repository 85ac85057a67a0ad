// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("network failure: {0}")]
    NetworkFailure(String),

    #[error("remote collection still empty after seeding: {0}")]
    EmptyResultRace(String),

    #[error("malformed row: {0}")]
    MalformedRow(String),

    #[error("seed data unavailable: {0}")]
    Seed(String),

    #[error("render failure: {0}")]
    Render(String),
}

impl ApplicationError {
    pub fn empty_result_race(msg: impl Into<String>) -> Self {
        Self::EmptyResultRace(msg.into())
    }

    pub fn malformed_row(msg: impl Into<String>) -> Self {
        Self::MalformedRow(msg.into())
    }

    pub fn seed(msg: impl Into<String>) -> Self {
        Self::Seed(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::Validation(msg),
            DomainError::MalformedRow(msg) => Self::MalformedRow(msg),
            DomainError::Remote(msg) => Self::NetworkFailure(msg),
        }
    }
}
