// edlp/src/commands/mod.rs

pub mod clear;
pub mod export;
pub mod list;
pub mod serve;
pub mod submit;
pub mod validate;
