// file: src/tools/mod.rs
// description: external tool discovery and command line construction
// reference: internal module structure

pub mod command;
pub mod registry;

pub use command::{demux_args, extract_args, plot_args, transcode_args};
pub use registry::Toolset;
