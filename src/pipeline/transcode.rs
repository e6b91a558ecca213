// file: src/pipeline/transcode.rs
// description: runs HandBrakeCLI and drives the progress bar from its stdout
// reference: std::process with piped stdout, regex progress matching

use crate::config::EncodeConfig;
use crate::error::{PipelineError, Result};
use crate::models::{JobPaths, ResolvedTool};
use crate::parser::{Segments, parse_progress_line};
use crate::pipeline::progress::ProgressTracker;
use crate::tools::transcode_args;
use std::io::{self, BufRead, BufReader};
use std::process::{Command, Stdio};
use tracing::debug;

/// Feeds every status segment to the tracker. Returns how many matched the
/// progress pattern; other output is ignored.
pub fn consume_progress<R: BufRead>(reader: R, tracker: &mut ProgressTracker) -> io::Result<usize> {
    let mut matched = 0;

    for segment in Segments::new(reader) {
        let segment = segment?;
        if let Some(update) = parse_progress_line(&segment) {
            matched += 1;
            tracker.update(&update);
        }
    }

    Ok(matched)
}

/// Blocks until HandBrakeCLI exits. The intermediate file may be left
/// partially written on failure; the caller owns its removal.
pub fn transcode(
    handbrake: &ResolvedTool,
    paths: &JobPaths,
    encode: &EncodeConfig,
    tracker: &mut ProgressTracker,
) -> Result<()> {
    let args = transcode_args(&paths.input, &paths.intermediate, encode);
    debug!("Running {} {:?}", handbrake.path.display(), args);

    let mut child = Command::new(&handbrake.path)
        .args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| PipelineError::Spawn {
            tool: handbrake.tool.to_string(),
            source,
        })?;

    let read_result = match child.stdout.take() {
        Some(stdout) => consume_progress(BufReader::new(stdout), tracker),
        None => Err(io::Error::other("HandBrakeCLI stdout was not captured")),
    };
    tracker.finish();

    let status = child.wait()?;
    let matched = read_result?;
    debug!("HandBrakeCLI reported {} progress updates", matched);

    if !status.success() {
        return Err(PipelineError::TranscodeFailed(status.code()));
    }

    Ok(())
}
