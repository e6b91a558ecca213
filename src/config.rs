// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{PipelineError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "hdr10plus_extract.toml";
pub const ENV_PREFIX: &str = "HDR10PLUS_EXTRACT";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    pub tools: ToolsConfig,
    pub output: OutputConfig,
    pub encode: EncodeConfig,
    pub plot: PlotConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ToolsConfig {
    /// Directory holding HandBrakeCLI, ffmpeg and hdr10plus_tool.
    pub dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Directory the intermediate, JSON and plot files are written to.
    pub dir: PathBuf,
}

/// HandBrakeCLI settings. The defaults produce a tiny 10-bit HEVC encode that
/// exists only to carry the HDR10+ SEI messages through to the extractor.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EncodeConfig {
    pub encoder: String,
    pub preset: String,
    pub quality: u32,
    pub bitrate_kbps: u32,
    pub width: u32,
    pub height: u32,
    pub crop: String,
    pub format: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlotConfig {
    pub title: String,
}

impl Config {
    /// Layers built-in defaults, an optional TOML file and
    /// `HDR10PLUS_EXTRACT__<SECTION>__<KEY>` environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let defaults = config::Config::try_from(&Self::default_config())
            .map_err(|e| PipelineError::Config(e.to_string()))?;

        let mut builder = config::Config::builder().add_source(defaults);

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder
                .add_source(config::File::from(Path::new(DEFAULT_CONFIG_FILE)).required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| PipelineError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| PipelineError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            tools: ToolsConfig {
                dir: PathBuf::from("tools"),
            },
            output: OutputConfig {
                dir: PathBuf::from("."),
            },
            encode: EncodeConfig {
                encoder: "x265_10bit".to_string(),
                preset: "ultrafast".to_string(),
                quality: 0,
                bitrate_kbps: 100,
                width: 608,
                height: 342,
                crop: "0:0:0:0".to_string(),
                format: "av_mkv".to_string(),
            },
            plot: PlotConfig {
                title: "HDR10+ Plot".to_string(),
            },
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.tools.dir.as_os_str().is_empty() {
            return Err(PipelineError::Config(
                "tools.dir must not be empty".to_string(),
            ));
        }

        if self.encode.width == 0 || self.encode.height == 0 {
            return Err(PipelineError::Config(
                "encode.width and encode.height must be greater than 0".to_string(),
            ));
        }

        if self.encode.encoder.trim().is_empty() {
            return Err(PipelineError::Config(
                "encode.encoder must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}
