// edlp-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

use crate::domain::policy::ValidationReport;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Policy draft rejected ({count} validation error(s))")]
    #[diagnostic(
        code(edlp::domain::invalid_draft),
        help("Fix the following fields and submit again:\n{details}")
    )]
    InvalidDraft { count: usize, details: String },

    #[error("Unknown {field} '{value}'")]
    #[diagnostic(
        code(edlp::domain::unknown_choice),
        help("Expected one of: {expected}")
    )]
    UnknownChoice {
        field: &'static str,
        value: String,
        expected: String,
    },

    #[error("No records to export")]
    #[diagnostic(
        code(edlp::domain::nothing_to_export),
        help("Submit at least one policy before exporting.")
    )]
    NothingToExport,
}

impl DomainError {
    pub fn invalid_draft(report: &ValidationReport) -> Self {
        DomainError::InvalidDraft {
            count: report.len(),
            details: report
                .errors()
                .iter()
                .map(|e| format!("  - {}", e))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}
