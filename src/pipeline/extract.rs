// file: src/pipeline/extract.rs
// description: ffmpeg demux piped into hdr10plus_tool extract, with per-process failure attribution
// reference: std::process pipes between two children

use crate::error::{PipelineError, Result, exit_code_label};
use crate::models::{JobPaths, ResolvedTool};
use crate::tools::{demux_args, extract_args};
use std::process::{Child, Command, ExitStatus, Stdio};
use tracing::{debug, warn};

/// Exit outcome of one side of the pipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessExit {
    pub success: bool,
    pub code: Option<i32>,
}

impl From<ExitStatus> for ProcessExit {
    fn from(status: ExitStatus) -> Self {
        Self {
            success: status.success(),
            code: status.code(),
        }
    }
}

/// The extractor is blamed first: when it exits early the demuxer usually
/// dies on the closed pipe, so the demuxer's failure is only reported when
/// the extractor succeeded.
pub fn attribute_failure(
    demuxer: &str,
    demux: ProcessExit,
    extractor: &str,
    extract: ProcessExit,
) -> Result<()> {
    match (demux.success, extract.success) {
        (true, true) => Ok(()),
        (demux_ok, false) => {
            let mut reason = format!("exited with code {}", exit_code_label(extract.code));
            if !demux_ok {
                reason.push_str(&format!(
                    " ({} also exited with code {})",
                    demuxer,
                    exit_code_label(demux.code)
                ));
            }
            Err(PipelineError::ExtractionFailed {
                tool: extractor.to_string(),
                reason,
            })
        }
        (false, true) => Err(PipelineError::ExtractionFailed {
            tool: demuxer.to_string(),
            reason: format!("exited with code {}", exit_code_label(demux.code)),
        }),
    }
}

pub fn extract_metadata(
    ffmpeg: &ResolvedTool,
    hdr10plus_tool: &ResolvedTool,
    paths: &JobPaths,
) -> Result<()> {
    let demux = demux_args(&paths.intermediate);
    let extract = extract_args(&paths.metadata);
    debug!(
        "Running {} {:?} | {} {:?}",
        ffmpeg.path.display(),
        demux,
        hdr10plus_tool.path.display(),
        extract
    );

    let mut demuxer = Command::new(&ffmpeg.path)
        .args(&demux)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .spawn()
        .map_err(|source| PipelineError::Spawn {
            tool: ffmpeg.tool.to_string(),
            source,
        })?;

    let Some(bitstream) = demuxer.stdout.take() else {
        stop(&mut demuxer);
        return Err(PipelineError::ExtractionFailed {
            tool: ffmpeg.tool.to_string(),
            reason: "stdout was not captured".to_string(),
        });
    };

    let extractor = Command::new(&hdr10plus_tool.path)
        .args(&extract)
        .stdin(Stdio::from(bitstream))
        .spawn();

    let mut extractor = match extractor {
        Ok(child) => child,
        Err(source) => {
            stop(&mut demuxer);
            return Err(PipelineError::Spawn {
                tool: hdr10plus_tool.tool.to_string(),
                source,
            });
        }
    };

    let (extract_status, demux_status) = wait_pair(&mut extractor, &mut demuxer)?;
    let extract_exit = ProcessExit::from(extract_status);
    let demux_exit = ProcessExit::from(demux_status);
    debug!("Extraction exits: demux {:?}, extract {:?}", demux_exit, extract_exit);

    attribute_failure(
        ffmpeg.tool.name(),
        demux_exit,
        hdr10plus_tool.tool.name(),
        extract_exit,
    )
}

/// Reaps both children before surfacing either wait error.
fn wait_pair(first: &mut Child, second: &mut Child) -> std::io::Result<(ExitStatus, ExitStatus)> {
    let first_status = first.wait();
    let second_status = second.wait();
    Ok((first_status?, second_status?))
}

fn stop(child: &mut Child) {
    if let Err(e) = child.kill() {
        warn!("Failed to stop process {}: {}", child.id(), e);
    }
    let _ = child.wait();
}

#[cfg(test)]
mod tests {
    use super::*;

    const OK: ProcessExit = ProcessExit {
        success: true,
        code: Some(0),
    };

    fn failed(code: i32) -> ProcessExit {
        ProcessExit {
            success: false,
            code: Some(code),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_wait_pair_reaps_both_children() {
        let mut first = Command::new("sh").args(["-c", "exit 3"]).spawn().unwrap();
        let mut second = Command::new("sh").args(["-c", "exit 0"]).spawn().unwrap();

        let (first_status, second_status) = wait_pair(&mut first, &mut second).unwrap();

        assert_eq!(first_status.code(), Some(3));
        assert!(second_status.success());
        assert!(first.try_wait().unwrap().is_some());
        assert!(second.try_wait().unwrap().is_some());
    }

    #[test]
    fn test_both_succeed() {
        assert!(attribute_failure("ffmpeg", OK, "hdr10plus_tool", OK).is_ok());
    }

    #[test]
    fn test_demuxer_failure_is_attributed_to_demuxer() {
        match attribute_failure("ffmpeg", failed(183), "hdr10plus_tool", OK) {
            Err(PipelineError::ExtractionFailed { tool, reason }) => {
                assert_eq!(tool, "ffmpeg");
                assert_eq!(reason, "exited with code 183");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_extractor_failure_takes_precedence() {
        match attribute_failure("ffmpeg", failed(1), "hdr10plus_tool", failed(2)) {
            Err(PipelineError::ExtractionFailed { tool, reason }) => {
                assert_eq!(tool, "hdr10plus_tool");
                assert_eq!(reason, "exited with code 2 (ffmpeg also exited with code 1)");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_extractor_failure_alone() {
        let err = attribute_failure("ffmpeg", OK, "hdr10plus_tool", failed(1)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Metadata extraction failed in hdr10plus_tool: exited with code 1"
        );
    }
}
