// edlp-core/src/application/records.rs
//
// USE CASES: List and clear stored policies.

use std::time::Instant;
use tracing::{debug, info, instrument, warn};

use crate::domain::policy::PolicyRecord;
use crate::error::EdlpError;
use crate::ports::store::PolicyStore;

#[instrument(skip_all, fields(store = store.backend_name()))]
pub async fn list_policies(store: &dyn PolicyStore) -> Result<Vec<PolicyRecord>, EdlpError> {
    let start = Instant::now();
    let records = store.list().await?;
    debug!(count = records.len(), "📋 Listed in {:.2?}", start.elapsed());
    Ok(records)
}

/// Irreversible. Callers are expected to have confirmed with the user.
#[instrument(skip_all, fields(store = store.backend_name()))]
pub async fn clear_policies(store: &dyn PolicyStore) -> Result<(), EdlpError> {
    warn!("🧹 Clearing every stored policy record");
    store.clear().await?;
    info!("Policy store is now empty");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::policy::NewPolicyRecord;
    use crate::infrastructure::adapters::{DuckDbPolicyStore, InMemoryPolicyStore};

    async fn exercise(store: &dyn PolicyStore) -> anyhow::Result<()> {
        for name in ["a", "b", "c"] {
            store
                .append(NewPolicyRecord {
                    submitter_name: name.into(),
                    ..Default::default()
                })
                .await?;
        }
        let names: Vec<String> = list_policies(store)
            .await?
            .into_iter()
            .map(|r| r.fields.submitter_name)
            .collect();
        assert_eq!(names, ["c", "b", "a"]);

        clear_policies(store).await?;
        assert!(list_policies(store).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_list_and_clear_memory() -> anyhow::Result<()> {
        exercise(&InMemoryPolicyStore::new()).await
    }

    #[tokio::test]
    async fn test_list_and_clear_duckdb() -> anyhow::Result<()> {
        exercise(&DuckDbPolicyStore::new(":memory:")?).await
    }
}
