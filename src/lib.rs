// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod metadata;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod tools;
pub mod utils;

pub use config::{Config, EncodeConfig, OutputConfig, PlotConfig, ToolsConfig};
pub use error::{PipelineError, Result};
pub use metadata::MetadataSummary;
pub use models::{DerivedNames, JobPaths, ResolvedTool, Tool, derive_names};
pub use parser::{ProgressUpdate, parse_eta, parse_progress_line};
pub use pipeline::{PipelineOrchestrator, PipelineReport, ProgressTracker, Stage};
pub use tools::Toolset;
pub use utils::{Console, Validator};
