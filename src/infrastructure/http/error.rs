use crate::domain::errors::DomainError;

pub fn map_reqwest(err: reqwest::Error) -> DomainError {
    if err.is_timeout() {
        return DomainError::Remote(format!("request timed out: {err}"));
    }
    if err.is_connect() {
        return DomainError::Remote(format!("connection failed: {err}"));
    }
    if let Some(status) = err.status() {
        return DomainError::Remote(format!("unexpected status {status}: {err}"));
    }
    if err.is_builder() {
        return DomainError::Validation(format!("invalid request: {err}"));
    }
    DomainError::Remote(err.to_string())
}
