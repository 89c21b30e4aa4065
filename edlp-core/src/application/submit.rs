// edlp-core/src/application/submit.rs
//
// USE CASE: Validate -> Canonicalize -> Persist.

use std::time::Instant;
use tracing::{debug, error, info, instrument, warn};

use crate::domain::policy::{
    NewPolicyRecord, PolicyDraft, PolicyRecord, ValidationReport, validate_and_canonicalize,
};
use crate::error::EdlpError;
use crate::ports::store::PolicyStore;

#[derive(Debug)]
pub enum SubmitOutcome {
    /// Stored; carries the id and timestamp assigned by the store.
    Accepted(PolicyRecord),
    /// Not stored; the draft is left for the user to correct.
    Rejected(ValidationReport),
}

/// A rejected draft never reaches the store.
#[instrument(skip_all, fields(store = store.backend_name()))]
pub async fn submit_draft(
    store: &dyn PolicyStore,
    draft: &PolicyDraft,
) -> Result<SubmitOutcome, EdlpError> {
    match validate_and_canonicalize(draft) {
        Err(report) => {
            warn!(errors = report.len(), "⛔ Draft rejected");
            Ok(SubmitOutcome::Rejected(report))
        }
        Ok(record) => Ok(SubmitOutcome::Accepted(submit_record(store, record).await?)),
    }
}

/// Persists an already-canonical record (the client rendered it).
#[instrument(skip_all, fields(store = store.backend_name()))]
pub async fn submit_record(
    store: &dyn PolicyStore,
    record: NewPolicyRecord,
) -> Result<PolicyRecord, EdlpError> {
    let start = Instant::now();
    debug!(?record, "Persisting policy record");

    match store.append(record).await {
        Ok(stored) => {
            info!(id = stored.id, "✅ Policy stored in {:.2?}", start.elapsed());
            Ok(stored)
        }
        Err(e) => {
            error!("❌ Store write failed after {:.2?}: {}", start.elapsed(), e);
            Err(e)
        }
    }
}
