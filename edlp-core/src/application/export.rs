// edlp-core/src/application/export.rs
//
// USE CASE: Export every stored policy as CSV.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use crate::domain::error::DomainError;
use crate::error::EdlpError;
use crate::infrastructure::export::{export_file_name, render_csv};
use crate::ports::store::PolicyStore;

/// CSV bytes of the whole store. An empty store is an error, not an empty file.
#[instrument(skip_all)]
pub async fn export_csv(store: &dyn PolicyStore) -> Result<Vec<u8>, EdlpError> {
    let records = store.list().await?;
    if records.is_empty() {
        return Err(DomainError::NothingToExport.into());
    }
    let bytes = render_csv(&records)?;
    info!(rows = records.len(), bytes = bytes.len(), "📤 CSV export rendered");
    Ok(bytes)
}

/// Writes `<prefix>_<today>.csv` into `out_dir` and returns its path.
pub async fn export_to_dir(
    store: &dyn PolicyStore,
    out_dir: &Path,
    prefix: &str,
) -> Result<PathBuf, EdlpError> {
    let bytes = export_csv(store).await?;

    fs::create_dir_all(out_dir)?;
    let path = out_dir.join(export_file_name(prefix, chrono::Local::now().date_naive()));
    fs::write(&path, bytes)?;

    info!(path = ?path, "Export written");
    Ok(path)
}
