// file: src/pipeline/orchestrator.rs
// description: coordinates validation, transcode, metadata extraction, plotting and cleanup
// reference: sequential blocking workflow over external tools

use crate::config::Config;
use crate::error::{PipelineError, Result};
use crate::metadata::MetadataSummary;
use crate::models::JobPaths;
use crate::pipeline::cleanup::remove_intermediate;
use crate::pipeline::extract::extract_metadata;
use crate::pipeline::plot::plot_metadata;
use crate::pipeline::progress::ProgressTracker;
use crate::pipeline::stage::Stage;
use crate::pipeline::transcode::transcode;
use crate::tools::Toolset;
use crate::utils::{Console, StageTimer, Validator};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub paths: JobPaths,
    pub summary: MetadataSummary,
    pub removed_intermediate: bool,
    pub elapsed: Duration,
}

pub struct PipelineOrchestrator {
    config: Config,
    console: Console,
    show_progress: bool,
}

impl PipelineOrchestrator {
    pub fn new(config: Config, console: Console) -> Self {
        Self {
            config,
            console,
            show_progress: true,
        }
    }

    /// Disables the live encode bar, e.g. when stdout is not a terminal.
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Runs every stage in order. Whatever the outcome, the intermediate file
    /// is removed before returning.
    pub fn run(&self, input: &Path) -> Result<PipelineReport> {
        let timer = StageTimer::new("pipeline");
        self.console
            .info(&format!("Input file: {}", input.display()));

        let paths = JobPaths::new(input, &self.config.output.dir);
        let mut stage = Stage::Validating;
        let outcome = self.run_stages(&paths, &mut stage);

        if let Err(e) = &outcome {
            self.report_failure(stage, e);
        }

        advance(&mut stage, Stage::CleaningUp);
        let removed_intermediate = self.cleanup(&paths);

        match outcome {
            Ok(summary) => {
                advance(&mut stage, Stage::Done);
                self.console
                    .success("All processing steps completed successfully.");
                Ok(PipelineReport {
                    paths,
                    summary,
                    removed_intermediate,
                    elapsed: timer.finish(),
                })
            }
            Err(e) => {
                advance(&mut stage, Stage::Failed);
                timer.finish();
                Err(e)
            }
        }
    }

    fn run_stages(&self, paths: &JobPaths, stage: &mut Stage) -> Result<MetadataSummary> {
        self.console.info("Checking required binaries...");
        let toolset = Toolset::resolve(&self.config.tools.dir)?;
        self.console.success("All required binaries found.");

        Validator::validate_input_file(&paths.input)?;
        Validator::validate_output_directory(&self.config.output.dir)?;

        self.console
            .info(&format!("Output HEVC: {}", paths.intermediate.display()));
        self.console
            .info(&format!("Output JSON: {}", paths.metadata.display()));
        self.console
            .info(&format!("Output Plot: {}", paths.plot.display()));

        advance(stage, Stage::Transcoding);
        self.transcode(&toolset, paths)?;

        advance(stage, Stage::Extracting);
        let summary = self.extract(&toolset, paths)?;

        advance(stage, Stage::Plotting);
        self.plot(&toolset, paths)?;

        Ok(summary)
    }

    fn transcode(&self, toolset: &Toolset, paths: &JobPaths) -> Result<()> {
        let timer = StageTimer::new(Stage::Transcoding.as_str());
        self.console
            .info("Starting conversion from AV1 HDR10+ to HEVC HDR10+...");
        self.console.info("Launching HandBrakeCLI...");

        let mut tracker = if self.show_progress {
            ProgressTracker::new()
        } else {
            ProgressTracker::hidden()
        };

        self.console.info("Monitoring encoding progress...");
        transcode(&toolset.handbrake, paths, &self.config.encode, &mut tracker)?;

        timer.finish();
        self.console.success("Encoding completed.");
        Ok(())
    }

    fn extract(&self, toolset: &Toolset, paths: &JobPaths) -> Result<MetadataSummary> {
        let timer = StageTimer::new(Stage::Extracting.as_str());
        self.console
            .info("Extracting HDR10+ metadata from HEVC...");
        self.console.info("Running ffmpeg and hdr10plus_tool...");

        extract_metadata(&toolset.ffmpeg, &toolset.hdr10plus_tool, paths)?;
        let summary = MetadataSummary::from_path(&paths.metadata)?;

        timer.finish();
        self.console.success(&format!(
            "HDR10+ metadata extracted successfully to: {}",
            paths.metadata.display()
        ));
        if summary.frames == 0 {
            warn!("{} contains no per-frame metadata", paths.metadata.display());
        }
        self.console
            .info(&format!("HDR10+ metadata: {}", summary.describe()));

        Ok(summary)
    }

    fn plot(&self, toolset: &Toolset, paths: &JobPaths) -> Result<()> {
        let timer = StageTimer::new(Stage::Plotting.as_str());
        self.console.info("Generating HDR10+ plot image...");

        plot_metadata(&toolset.hdr10plus_tool, paths, &self.config.plot.title)?;

        timer.finish();
        self.console
            .success(&format!("Plot saved to: {}", paths.plot.display()));
        Ok(())
    }

    /// Removal errors are reported but never replace the stage outcome.
    fn cleanup(&self, paths: &JobPaths) -> bool {
        match remove_intermediate(&paths.intermediate) {
            Ok(true) => {
                self.console.warning(&format!(
                    "Deleted temporary file: {}",
                    paths.intermediate.display()
                ));
                true
            }
            Ok(false) => false,
            Err(e) => {
                error!(
                    "Failed to delete {}: {}",
                    paths.intermediate.display(),
                    e
                );
                self.console.warning(&format!(
                    "Could not delete temporary file {}: {}",
                    paths.intermediate.display(),
                    e
                ));
                false
            }
        }
    }

    fn report_failure(&self, stage: Stage, err: &PipelineError) {
        match err {
            PipelineError::MissingToolsDirectory(_) => {
                self.console.error(&err.to_string());
                self.console.error(
                    "Process cannot continue. Please create the missing folder and add the required binaries.",
                );
            }
            PipelineError::MissingExecutables(_) => {
                self.console.error(&err.to_string());
                self.console
                    .error("Process cannot continue. Please install the missing dependencies.");
            }
            _ if err.is_validation() => self.console.error(&err.to_string()),
            _ => self
                .console
                .error(&format!("{} stage failed: {}", capitalize(stage.as_str()), err)),
        }
    }
}

fn advance(stage: &mut Stage, next: Stage) {
    if next == stage.next() {
        debug!("Stage {} -> {}", stage, next);
    } else {
        debug!("Stage {} -> {} (left early)", stage, next);
    }
    *stage = next;
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
