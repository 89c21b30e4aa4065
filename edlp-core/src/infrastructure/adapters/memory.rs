// edlp-core/src/infrastructure/adapters/memory.rs

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::policy::{NewPolicyRecord, PolicyRecord};
use crate::error::EdlpError;
use crate::infrastructure::adapters::stamp_now;
use crate::ports::store::PolicyStore;

#[derive(Default)]
struct Inner {
    // Oldest first; `list` reverses.
    records: Vec<PolicyRecord>,
    last_id: i64,
}

/// Process-local store, lost on restart. Useful for demos and tests.
#[derive(Clone, Default)]
pub struct InMemoryPolicyStore {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryPolicyStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PolicyStore for InMemoryPolicyStore {
    async fn list(&self) -> Result<Vec<PolicyRecord>, EdlpError> {
        let inner = self.inner.read().await;
        Ok(inner.records.iter().rev().cloned().collect())
    }

    async fn append(&self, record: NewPolicyRecord) -> Result<PolicyRecord, EdlpError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let stored = PolicyRecord::new(inner.last_id, record, stamp_now());
        inner.records.push(stored.clone());
        Ok(stored)
    }

    async fn clear(&self) -> Result<(), EdlpError> {
        self.inner.write().await.records.clear();
        Ok(())
    }

    fn backend_name(&self) -> &str {
        "memory"
    }
}
