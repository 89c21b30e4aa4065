// edlp/src/commands/validate.rs
//
// USE CASE: Check a draft offline, the same way the form does on submit.

use anyhow::Context;
use std::path::{Path, PathBuf};

use edlp_core::domain::policy::{PolicyDraft, ValidationReport, canonicalize, validate};
use edlp_core::infrastructure::drafts::load_draft;

pub fn execute(file: PathBuf) -> anyhow::Result<()> {
    let draft = read_draft(&file)?;

    let report = validate(&draft);
    print_rejection(&report);
    // Surfaces as `InvalidDraft` (exit code 1) when anything was reported.
    report.into_result()?;

    eprintln!("✅ Draft is valid.");
    println!("{}", serde_json::to_string_pretty(&canonicalize(&draft))?);
    Ok(())
}

pub(crate) fn read_draft(file: &Path) -> anyhow::Result<PolicyDraft> {
    load_draft(file).with_context(|| format!("Cannot read draft {:?}", file))
}

pub(crate) fn print_rejection(report: &ValidationReport) {
    if report.is_valid() {
        return;
    }
    eprintln!("❌ Draft rejected ({} error(s)):", report.len());
    for message in report.errors() {
        eprintln!("   ➜ {}", message);
    }
}
