// edlp-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DatabaseError {
    #[error("DuckDB Engine Error: {0}")]
    #[diagnostic(
        code(edlp::infra::database::duckdb),
        help("An error occurred inside the policy store.")
    )]
    DuckDB(#[from] duckdb::Error),

    #[error("Policy store lock poisoned")]
    #[diagnostic(code(edlp::infra::database::poisoned))]
    Poisoned,
}

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- DATABASE (Abstracted) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Database(#[from] DatabaseError),

    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(edlp::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- CONFIG / DRAFT FILES ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(edlp::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),

    #[error("JSON Parsing Error: {0}")]
    #[diagnostic(code(edlp::infra::json))]
    JsonError(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    ConfigError(String),

    #[error("Configuration file not found at '{0}'")]
    #[diagnostic(code(edlp::infra::config_missing))]
    ConfigNotFound(String),

    #[error("Invalid configuration: {0}")]
    #[diagnostic(
        code(edlp::infra::config_invalid),
        help("Check edlp.yaml and the EDLP_* environment variables.")
    )]
    InvalidConfig(#[from] validator::ValidationErrors),

    // --- EXPORT ---
    #[error("CSV Export Error: {0}")]
    #[diagnostic(code(edlp::infra::csv))]
    Csv(#[from] csv::Error),
}

impl From<duckdb::Error> for InfrastructureError {
    fn from(err: duckdb::Error) -> Self {
        InfrastructureError::Database(DatabaseError::DuckDB(err))
    }
}

impl From<anyhow::Error> for InfrastructureError {
    fn from(err: anyhow::Error) -> Self {
        InfrastructureError::ConfigError(format!("{:#}", err))
    }
}
