// file: src/metadata/mod.rs
// description: HDR10+ metadata JSON inspection module exports
// reference: internal module structure

pub mod summary;

pub use summary::MetadataSummary;
