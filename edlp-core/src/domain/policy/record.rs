// edlp-core/src/domain/policy/record.rs

use serde::{Deserialize, Serialize};

/// Canonical, display-ready summary of a validated draft, before the store
/// assigns an id and a timestamp. Field order is the export column order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewPolicyRecord {
    pub submitter_name: String,
    pub submitter_role: String,
    pub office: String,
    pub blacklist: String,
    pub whitelist: String,
    pub sender: String,
    pub keywords: String,
    pub attachment: String,
    pub sourcecode: String,
    pub dedup: String,
    pub approval: String,
    pub cc: String,
    pub bcc: String,
}

impl NewPolicyRecord {
    pub const COLUMN_COUNT: usize = 13;

    /// Values in column order.
    pub fn values(&self) -> [&str; Self::COLUMN_COUNT] {
        [
            self.submitter_name.as_str(),
            self.submitter_role.as_str(),
            self.office.as_str(),
            self.blacklist.as_str(),
            self.whitelist.as_str(),
            self.sender.as_str(),
            self.keywords.as_str(),
            self.attachment.as_str(),
            self.sourcecode.as_str(),
            self.dedup.as_str(),
            self.approval.as_str(),
            self.cc.as_str(),
            self.bcc.as_str(),
        ]
    }
}

/// A persisted record. Immutable once the store hands it back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyRecord {
    pub id: i64,
    #[serde(flatten)]
    pub fields: NewPolicyRecord,
    pub timestamp: String,
}

impl PolicyRecord {
    pub fn new(id: i64, fields: NewPolicyRecord, timestamp: impl Into<String>) -> Self {
        Self {
            id,
            fields,
            timestamp: timestamp.into(),
        }
    }
}
