// edlp-core/src/domain/policy/draft.rs

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use super::schema::CategoryKey;

/// In-progress policy as edited by a user. Nothing here is trusted: closed
/// choices stay raw strings so the validator can report bad selections
/// instead of the parser rejecting the whole document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyDraft {
    pub submitter: Submitter,
    pub office: String,

    // --- Detection rules ---
    pub blacklist: RuleGroup,
    pub whitelist: RuleGroup,
    pub sender: RuleGroup,
    pub keywords: RuleGroup,
    pub attachment: RuleGroup,
    pub source_code: bool,
    pub dedup: bool,

    // --- Control measures ---
    pub approval: Approval,
    pub cc: Recipient,
    pub bcc: Recipient,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Submitter {
    pub name: String,
    pub role: String,
}

/// A toggle gating keyed sub-options. Keys follow the field schema; unknown
/// keys are carried along but never read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleGroup {
    pub enabled: bool,
    pub options: BTreeMap<String, SubOption>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubOption {
    pub enabled: bool,
    #[serde(deserialize_with = "text_or_number")]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Approval {
    pub enabled: bool,
    #[serde(deserialize_with = "text_or_number")]
    pub window_minutes: String,
    pub timeout_strategy: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recipient {
    pub enabled: bool,
    pub recipients: String,
}

impl PolicyDraft {
    pub fn rule_group(&self, key: CategoryKey) -> Option<&RuleGroup> {
        match key {
            CategoryKey::Blacklist => Some(&self.blacklist),
            CategoryKey::Whitelist => Some(&self.whitelist),
            CategoryKey::Sender => Some(&self.sender),
            CategoryKey::Keywords => Some(&self.keywords),
            CategoryKey::Attachment => Some(&self.attachment),
            _ => None,
        }
    }

    pub fn switch(&self, key: CategoryKey) -> Option<bool> {
        match key {
            CategoryKey::SourceCode => Some(self.source_code),
            CategoryKey::Dedup => Some(self.dedup),
            _ => None,
        }
    }

    pub fn recipient(&self, key: CategoryKey) -> Option<&Recipient> {
        match key {
            CategoryKey::Cc => Some(&self.cc),
            CategoryKey::Bcc => Some(&self.bcc),
            _ => None,
        }
    }
}

impl RuleGroup {
    /// An enabled group with no sub-option chosen yet.
    pub fn on() -> Self {
        Self {
            enabled: true,
            options: BTreeMap::new(),
        }
    }

    pub fn with_value(mut self, key: &str, value: impl Into<String>) -> Self {
        self.options.insert(
            key.to_string(),
            SubOption {
                enabled: true,
                value: value.into(),
            },
        );
        self
    }

    pub fn with_flag(mut self, key: &str) -> Self {
        self.options.insert(
            key.to_string(),
            SubOption {
                enabled: true,
                value: String::new(),
            },
        );
        self
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.options.get(key).is_some_and(|o| o.enabled)
    }

    pub fn value(&self, key: &str) -> &str {
        self.options.get(key).map(|o| o.value.as_str()).unwrap_or("")
    }
}

impl Approval {
    pub fn new(window_minutes: impl Into<String>, timeout_strategy: impl Into<String>) -> Self {
        Self {
            enabled: true,
            window_minutes: window_minutes.into(),
            timeout_strategy: timeout_strategy.into(),
        }
    }
}

impl Recipient {
    pub fn to(recipients: impl Into<String>) -> Self {
        Self {
            enabled: true,
            recipients: recipients.into(),
        }
    }
}

/// Form inputs of type number arrive either as JSON numbers or as strings.
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Text(s)) => s,
        Some(Raw::Integer(n)) => n.to_string(),
        Some(Raw::Float(f)) => f.to_string(),
        None => String::new(),
    })
}
