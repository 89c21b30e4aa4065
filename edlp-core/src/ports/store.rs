// edlp-core/src/ports/store.rs

// What the core needs from persistence, without knowing how it's done.
// Every call is one atomic request/response: it either fully succeeds or
// reports an error. No retries, no caching on this side.

use crate::domain::policy::{NewPolicyRecord, PolicyRecord};
use crate::error::EdlpError;
use async_trait::async_trait;

#[async_trait]
pub trait PolicyStore: Send + Sync {
    /// All records, newest first.
    async fn list(&self) -> Result<Vec<PolicyRecord>, EdlpError>;

    /// Persists a record; the store assigns the id and the timestamp.
    async fn append(&self, record: NewPolicyRecord) -> Result<PolicyRecord, EdlpError>;

    /// Irreversibly removes every record.
    async fn clear(&self) -> Result<(), EdlpError>;

    fn backend_name(&self) -> &str;
}
