// edlp-core/src/domain/policy/mod.rs

pub mod canonicalizer;
pub mod choices;
pub mod draft;
pub mod record;
pub mod schema;
pub mod validator;

// Re-exports
pub use canonicalizer::{canonicalize, render_category, validate_and_canonicalize};
pub use choices::{Office, SubmitterRole, TimeoutStrategy};
pub use draft::{Approval, PolicyDraft, Recipient, RuleGroup, SubOption, Submitter};
pub use record::{NewPolicyRecord, PolicyRecord};
pub use schema::{CATEGORIES, CategoryKey, CategoryShape, CategorySpec, OptionKind, SubOptionSpec};
pub use validator::{ValidationReport, validate};
