// file: src/tools/registry.rs
// description: resolves the required executables inside the tools directory
// reference: https://docs.rs/which

use crate::error::{PipelineError, Result};
use crate::models::{ResolvedTool, Tool};
use crate::utils::Validator;
use std::path::{Path, PathBuf};
use tracing::debug;

/// The three executables the pipeline runs, checked once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolset {
    pub handbrake: ResolvedTool,
    pub ffmpeg: ResolvedTool,
    pub hdr10plus_tool: ResolvedTool,
}

impl Toolset {
    /// Every missing executable is reported in one error rather than failing
    /// on the first.
    pub fn resolve(tools_dir: &Path) -> Result<Self> {
        Validator::validate_tools_directory(tools_dir)?;

        let mut found = Vec::with_capacity(Tool::ALL.len());
        let mut missing = Vec::new();

        for tool in Tool::ALL {
            match locate(tool, tools_dir) {
                Some(path) => {
                    debug!("Found {} at {}", tool, path.display());
                    found.push(ResolvedTool { tool, path });
                }
                None => missing.push(tool.file_name()),
            }
        }

        if !missing.is_empty() {
            return Err(PipelineError::MissingExecutables(missing));
        }

        let take = |wanted: Tool| {
            found
                .iter()
                .find(|resolved| resolved.tool == wanted)
                .cloned()
                .ok_or_else(|| PipelineError::MissingExecutables(vec![wanted.file_name()]))
        };

        Ok(Self {
            handbrake: take(Tool::HandBrake)?,
            ffmpeg: take(Tool::Ffmpeg)?,
            hdr10plus_tool: take(Tool::Hdr10PlusTool)?,
        })
    }

    pub fn get(&self, tool: Tool) -> &ResolvedTool {
        match tool {
            Tool::HandBrake => &self.handbrake,
            Tool::Ffmpeg => &self.ffmpeg,
            Tool::Hdr10PlusTool => &self.hdr10plus_tool,
        }
    }
}

/// The expected path must name an executable file; `PATH` is never searched.
fn locate(tool: Tool, tools_dir: &Path) -> Option<PathBuf> {
    let expected = tool.expected_path(tools_dir);
    match which::which(&expected) {
        Ok(_) => Some(expected),
        Err(e) => {
            debug!("{} not usable at {}: {}", tool, expected.display(), e);
            None
        }
    }
}
