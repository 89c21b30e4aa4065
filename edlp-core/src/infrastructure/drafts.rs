// edlp-core/src/infrastructure/drafts.rs
//
// Draft files for offline checks: `.yaml` / `.yml` are YAML, anything else JSON.

use std::fs;
use std::path::Path;
use tracing::debug;

use crate::domain::policy::PolicyDraft;
use crate::infrastructure::error::InfrastructureError;

pub fn load_draft(path: &Path) -> Result<PolicyDraft, InfrastructureError> {
    let content = fs::read_to_string(path)?;

    let is_yaml = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"));
    debug!(path = ?path, yaml = is_yaml, "Parsing draft file");

    let draft = if is_yaml {
        serde_yaml::from_str(&content)?
    } else {
        serde_json::from_str(&content)?
    };
    Ok(draft)
}
