// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod job;
pub mod tool;

pub use job::{DerivedNames, JobPaths, derive_names};
pub use tool::{ResolvedTool, Tool};
