// edlp-core/src/lib.rs

// 1. Documentation is not enforced yet
#![allow(missing_docs)]

// 2. Memory safety
#![deny(unsafe_code)]
// 3. Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// 4. Performance
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// 1. Ports (Interfaces / Traits)
// Contracts the core depends on (PolicyStore).
pub mod ports;

// 2. Domain
// Field schema, validator, canonicalizer.
// Depends on nothing else (no infra, no app).
pub mod domain;

// 3. Infrastructure (Adapters)
// DuckDB / in-memory stores, config files, CSV export, HTTP router.
pub mod infrastructure;

// 4. Application (Use Cases)
// Submit, list, clear, export.
pub mod application;

// --- GLOBAL ERROR HANDLING ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
pub use error::EdlpError;
