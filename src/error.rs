// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PipelineError>;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing required folder: {}", .0.display())]
    MissingToolsDirectory(PathBuf),

    #[error("Missing required binaries: {}", .0.join(", "))]
    MissingExecutables(Vec<String>),

    #[error("File not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Failed to launch {tool}: {source}")]
    Spawn {
        tool: String,
        source: std::io::Error,
    },

    #[error("HandBrakeCLI failed with exit code {}", code_label(.0))]
    TranscodeFailed(Option<i32>),

    #[error("Metadata extraction failed in {tool}: {reason}")]
    ExtractionFailed { tool: String, reason: String },

    #[error("Plot generation failed with exit code {}", code_label(.0))]
    PlotFailed(Option<i32>),

    #[error("Invalid HDR10+ metadata in {}: {message}", .path.display())]
    InvalidMetadata { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PipelineError {
    /// True for failures raised before any external tool was started.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Config(_)
                | Self::MissingToolsDirectory(_)
                | Self::MissingExecutables(_)
                | Self::InputNotFound(_)
        )
    }
}

/// Processes killed by a signal have no exit code.
pub fn exit_code_label(code: Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "none (terminated by signal)".to_string(),
    }
}

fn code_label(code: &Option<i32>) -> String {
    exit_code_label(*code)
}
