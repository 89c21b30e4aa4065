// edlp-core/src/infrastructure/adapters/mod.rs

pub mod duckdb;
pub mod memory;

pub use self::duckdb::DuckDbPolicyStore;
pub use memory::InMemoryPolicyStore;

/// Local wall-clock format of record timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

pub(crate) fn stamp_now() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

use std::sync::Arc;

use crate::infrastructure::config::{AppConfig, StoreBackend};
use crate::infrastructure::error::InfrastructureError;
use crate::ports::store::PolicyStore;

/// Builds the store selected by the configuration.
pub fn open_store(config: &AppConfig) -> Result<Arc<dyn PolicyStore>, InfrastructureError> {
    Ok(match config.store {
        StoreBackend::DuckDB => Arc::new(DuckDbPolicyStore::new(&config.db_path)?),
        StoreBackend::Memory => Arc::new(InMemoryPolicyStore::new()),
    })
}
