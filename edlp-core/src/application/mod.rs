// edlp-core/src/application/mod.rs

pub mod export;
pub mod records;
pub mod submit;

// --- RE-EXPORTS (FACADE PATTERN) ---
// Lets the CLI and the HTTP layer do
// `use edlp_core::application::{submit_draft, list_policies};`
// without knowing the file layout.

pub use export::{export_csv, export_to_dir};
pub use records::{clear_policies, list_policies};
pub use submit::{SubmitOutcome, submit_draft, submit_record};
