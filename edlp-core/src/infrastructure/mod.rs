// edlp-core/src/infrastructure/mod.rs

pub mod adapters;
pub mod config;
pub mod drafts;
pub mod error;
pub mod export;
pub mod http;
