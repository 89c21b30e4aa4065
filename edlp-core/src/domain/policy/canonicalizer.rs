// edlp-core/src/domain/policy/canonicalizer.rs
//
// Draft -> flat record. Pure formatting, no validation: feed it drafts that
// passed `validate` (or go through `validate_and_canonicalize`).

use std::fmt::Display;
use std::str::FromStr;

use super::choices::{Office, SubmitterRole, TimeoutStrategy};
use super::draft::{PolicyDraft, RuleGroup};
use super::record::NewPolicyRecord;
use super::schema::{
    self, ANONYMOUS_SUBMITTER, CategoryKey, CategoryShape, ENABLED_MARKER, ITEM_SEPARATOR,
    NOT_APPLICABLE, OptionKind, SWITCH_ON_MARKER, SubOptionSpec,
};
use super::validator::{ValidationReport, validate};

pub fn canonicalize(draft: &PolicyDraft) -> NewPolicyRecord {
    let name = draft.submitter.name.trim();
    let submitter_name = if name.is_empty() {
        ANONYMOUS_SUBMITTER.to_string()
    } else {
        name.to_string()
    };

    NewPolicyRecord {
        submitter_name,
        submitter_role: choice_label::<SubmitterRole>(&draft.submitter.role),
        office: choice_label::<Office>(&draft.office),
        blacklist: render_category(draft, CategoryKey::Blacklist),
        whitelist: render_category(draft, CategoryKey::Whitelist),
        sender: render_category(draft, CategoryKey::Sender),
        keywords: render_category(draft, CategoryKey::Keywords),
        attachment: render_category(draft, CategoryKey::Attachment),
        sourcecode: render_category(draft, CategoryKey::SourceCode),
        dedup: render_category(draft, CategoryKey::Dedup),
        approval: render_category(draft, CategoryKey::Approval),
        cc: render_category(draft, CategoryKey::Cc),
        bcc: render_category(draft, CategoryKey::Bcc),
    }
}

/// Validates first; only a clean draft is rendered.
pub fn validate_and_canonicalize(draft: &PolicyDraft) -> Result<NewPolicyRecord, ValidationReport> {
    let report = validate(draft);
    if report.is_valid() {
        Ok(canonicalize(draft))
    } else {
        Err(report)
    }
}

/// Renders the display string of one category column.
pub fn render_category(draft: &PolicyDraft, key: CategoryKey) -> String {
    match schema::category(key).shape {
        CategoryShape::Group { options, .. } => match draft.rule_group(key) {
            Some(group) if group.enabled => render_group(group, options),
            _ => NOT_APPLICABLE.to_string(),
        },
        CategoryShape::Switch => match draft.switch(key) {
            Some(true) => SWITCH_ON_MARKER.to_string(),
            _ => NOT_APPLICABLE.to_string(),
        },
        // Approval is mandatory, so the toggle is not consulted here.
        CategoryShape::Approval => format!(
            "時間: {}分, 超時: {}",
            draft.approval.window_minutes.trim(),
            choice_label::<TimeoutStrategy>(&draft.approval.timeout_strategy)
        ),
        CategoryShape::Recipient { .. } => match draft.recipient(key) {
            Some(recipient) if recipient.enabled => recipient.recipients.clone(),
            _ => NOT_APPLICABLE.to_string(),
        },
    }
}

// Closed-set values are stored as their canonical label; anything that does not
// parse (an unvalidated draft) passes through untouched.
fn choice_label<T>(raw: &str) -> String
where
    T: FromStr + Display,
{
    raw.parse::<T>()
        .map_or_else(|_| raw.to_string(), |choice| choice.to_string())
}

fn render_group(group: &RuleGroup, options: &[SubOptionSpec]) -> String {
    let items: Vec<String> = options
        .iter()
        .filter(|o| group.is_active(o.key))
        .map(|o| render_option(o, group.value(o.key)))
        .collect();

    if items.is_empty() {
        ENABLED_MARKER.to_string()
    } else {
        items.join(ITEM_SEPARATOR)
    }
}

fn render_option(option: &SubOptionSpec, value: &str) -> String {
    match option.kind {
        OptionKind::Flag => option.label.to_string(),
        OptionKind::Text => format!("{}: {}", option.label, value),
        OptionKind::Number { unit } => format!("{}: {}{}", option.label, value, unit),
    }
}
