// file: src/parser/mod.rs
// description: transcoder output parsing module exports
// reference: internal module structure

pub mod progress;
pub mod segments;

pub use progress::{ProgressUpdate, format_hhmmss, parse_eta, parse_progress_line};
pub use segments::Segments;
