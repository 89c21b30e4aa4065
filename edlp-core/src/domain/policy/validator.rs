// edlp-core/src/domain/policy/validator.rs

use serde::Serialize;
use std::str::FromStr;

use super::choices::{Office, SubmitterRole, TimeoutStrategy};
use super::draft::{Approval, PolicyDraft, RuleGroup, Submitter};
use super::schema::{CATEGORIES, CategoryShape, SUBMITTER_NAME_MAX_CHARS, SubOptionSpec};
use crate::domain::error::DomainError;

pub const MSG_NAME_TOO_LONG: &str = "「填寫人」最多只能填寫10個字。";
pub const MSG_ROLE_REQUIRED: &str = "請選擇「填寫人職級」。";
pub const MSG_OFFICE_REQUIRED: &str = "請選擇「辦公室」。";
pub const MSG_APPROVAL_MANDATORY: &str = "請勾選「審批」並填寫相關資訊（此為必選項目）。";
pub const MSG_APPROVAL_WINDOW_REQUIRED: &str = "請填寫「審批時間」。";
pub const MSG_APPROVAL_STRATEGY_REQUIRED: &str = "請選擇「超時處理方式」。";

/// Ordered list of human-readable violations. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    errors: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }

    pub fn into_result(self) -> Result<(), DomainError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(DomainError::invalid_draft(&self))
        }
    }

    fn push(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}

/// Checks a draft against every rule in one pass.
///
/// Order is part of the contract: submitter, office, then categories in
/// schema declaration order. Nothing short-circuits.
pub fn validate(draft: &PolicyDraft) -> ValidationReport {
    let mut report = ValidationReport::default();

    check_submitter(&draft.submitter, &mut report);
    if Office::from_str(&draft.office).is_err() {
        report.push(MSG_OFFICE_REQUIRED);
    }

    for spec in CATEGORIES.iter() {
        match spec.shape {
            CategoryShape::Group {
                select_one_message,
                options,
            } => {
                if let Some(group) = draft.rule_group(spec.key) {
                    check_group(group, select_one_message, options, &mut report);
                }
            }
            CategoryShape::Switch => {}
            CategoryShape::Approval => check_approval(&draft.approval, &mut report),
            CategoryShape::Recipient { missing_message } => {
                let missing = draft
                    .recipient(spec.key)
                    .is_some_and(|r| r.enabled && is_blank(&r.recipients));
                if missing {
                    report.push(missing_message);
                }
            }
        }
    }

    report
}

fn check_submitter(submitter: &Submitter, report: &mut ValidationReport) {
    if submitter.name.trim().chars().count() > SUBMITTER_NAME_MAX_CHARS {
        report.push(MSG_NAME_TOO_LONG);
    }
    if SubmitterRole::from_str(&submitter.role).is_err() {
        report.push(MSG_ROLE_REQUIRED);
    }
}

fn check_group(
    group: &RuleGroup,
    select_one_message: &str,
    options: &[SubOptionSpec],
    report: &mut ValidationReport,
) {
    if !group.enabled {
        return;
    }

    let has_scope = options
        .iter()
        .filter(|o| o.counts_as_scope)
        .any(|o| group.is_active(o.key));
    if !has_scope {
        report.push(select_one_message);
    }

    for option in options {
        match option.missing_message {
            Some(message) if group.is_active(option.key) && is_blank(group.value(option.key)) => {
                report.push(message)
            }
            _ => {}
        }
    }
}

// Presence only, the window value is not range-checked.
fn check_approval(approval: &Approval, report: &mut ValidationReport) {
    if !approval.enabled {
        report.push(MSG_APPROVAL_MANDATORY);
        return;
    }
    if is_blank(&approval.window_minutes) {
        report.push(MSG_APPROVAL_WINDOW_REQUIRED);
    }
    if TimeoutStrategy::from_str(&approval.timeout_strategy).is_err() {
        report.push(MSG_APPROVAL_STRATEGY_REQUIRED);
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
