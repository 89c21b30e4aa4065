// edlp/src/commands/clear.rs
//
// USE CASE: Wipe the store.

use edlp_core::application::clear_policies;
use edlp_core::infrastructure::adapters::DuckDbPolicyStore;

pub async fn execute(db_path: String, yes: bool) -> anyhow::Result<()> {
    if !yes {
        anyhow::bail!(
            "❌ Refusing to delete every policy in {} without confirmation.\n👉 Re-run with --yes.",
            db_path
        );
    }

    let store = DuckDbPolicyStore::new(&db_path)?;
    clear_policies(&store).await?;
    println!("🧹 All policies deleted from {}", db_path);
    Ok(())
}
