// file: src/main.rs
// description: commandline application entry point
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use hdr10plus_extract::config::DEFAULT_CONFIG_FILE;
use hdr10plus_extract::{Config, Console, PipelineOrchestrator};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "hdr10plus_extract")]
#[command(version)]
#[command(about = "Extract HDR10+ from Netflix AV1 MKV.", long_about = None)]
struct Cli {
    /// Input Netflix AV1 MKV file.
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    hdr10plus_extract::utils::logging::init_logger(cli.color, cli.verbose);
    let console = Console::new(cli.color);

    let config = match load_config(&cli.config).context("Failed to load configuration") {
        Ok(config) => config,
        Err(e) => {
            console.error(&format!("{:#}", e));
            return ExitCode::FAILURE;
        }
    };

    let orchestrator =
        PipelineOrchestrator::new(config, console).with_progress(std::io::stdout().is_terminal());

    // Failures are reported by the orchestrator as they happen.
    match orchestrator.run(&cli.input) {
        Ok(report) => {
            info!(
                "Finished {} in {:.2}s",
                report.paths.input.display(),
                report.elapsed.as_secs_f64()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            info!("Pipeline aborted: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config(path: &Path) -> Result<Config> {
    if path.exists() {
        info!("Loading configuration from: {}", path.display());
        return Ok(Config::load(Some(path))?);
    }

    if path.as_os_str() != DEFAULT_CONFIG_FILE {
        warn!(
            "Config file {} not found, using default configuration",
            path.display()
        );
    }

    Ok(Config::load(None)?)
}
