pub mod error;
pub mod policy;

// Convenience re-exports to keep imports short elsewhere
pub use error::DomainError;
pub use policy::{
    NewPolicyRecord, PolicyDraft, PolicyRecord, ValidationReport, canonicalize, validate,
};
