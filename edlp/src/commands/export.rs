// edlp/src/commands/export.rs
//
// USE CASE: Export stored policies to CSV.

use std::path::PathBuf;

use edlp_core::application::export_to_dir;
use edlp_core::infrastructure::adapters::DuckDbPolicyStore;

pub async fn execute(db_path: String, out_dir: PathBuf, prefix: String) -> anyhow::Result<()> {
    let store = DuckDbPolicyStore::new(&db_path)?;
    let path = export_to_dir(&store, &out_dir, &prefix).await?;
    println!("✨ Exported to {}", path.display());
    Ok(())
}
