// edlp-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EdlpError {
    // --- DOMAIN ERRORS (invalid drafts, nothing to export) ---
    #[error(transparent)]
    Domain(#[from] DomainError),

    // --- INFRASTRUCTURE ERRORS (store, IO, parsing) ---
    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),

    // --- GENERIC / APPLICATION ERRORS ---
    #[error("Internal Error: {0}")]
    InternalError(String),
}

impl From<std::io::Error> for EdlpError {
    fn from(err: std::io::Error) -> Self {
        EdlpError::Infrastructure(InfrastructureError::Io(err))
    }
}

impl From<duckdb::Error> for EdlpError {
    fn from(err: duckdb::Error) -> Self {
        EdlpError::Infrastructure(InfrastructureError::from(err))
    }
}
