// file: src/pipeline/plot.rs
// description: renders the HDR10+ metadata plot with hdr10plus_tool

use crate::error::{PipelineError, Result};
use crate::models::{JobPaths, ResolvedTool};
use crate::tools::plot_args;
use std::process::Command;
use tracing::debug;

/// Console output of the plot tool is passed straight through.
pub fn plot_metadata(hdr10plus_tool: &ResolvedTool, paths: &JobPaths, title: &str) -> Result<()> {
    let args = plot_args(&paths.metadata, title, &paths.plot);
    debug!("Running {} {:?}", hdr10plus_tool.path.display(), args);

    let status = Command::new(&hdr10plus_tool.path)
        .args(&args)
        .status()
        .map_err(|source| PipelineError::Spawn {
            tool: hdr10plus_tool.tool.to_string(),
            source,
        })?;

    if !status.success() {
        return Err(PipelineError::PlotFailed(status.code()));
    }

    Ok(())
}
