// file: src/metadata/summary.rs
// description: well-formedness check and frame/scene counts for hdr10plus_tool JSON output
// reference: https://docs.rs/serde_json

use crate::error::{PipelineError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct Hdr10PlusJson {
    #[serde(rename = "JSONInfo", default)]
    json_info: Option<JsonInfo>,
    #[serde(rename = "SceneInfo", default)]
    scene_info: Vec<serde_json::Value>,
    #[serde(rename = "SceneInfoSummary", default)]
    scene_info_summary: Option<SceneInfoSummary>,
}

#[derive(Debug, Deserialize)]
struct JsonInfo {
    #[serde(rename = "HDR10plusProfile", default)]
    profile: Option<String>,
    #[serde(rename = "Version", default)]
    version: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SceneInfoSummary {
    #[serde(rename = "SceneFirstFrameIndex", default)]
    scene_first_frame_index: Vec<u64>,
}

/// Counts reported after extraction. Only the document shape is read; the
/// per-frame luminance values are left to hdr10plus_tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataSummary {
    pub frames: usize,
    pub scenes: usize,
    pub profile: Option<String>,
    pub version: Option<String>,
}

impl MetadataSummary {
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        let parsed: Hdr10PlusJson = serde_json::from_str(json)?;

        let (profile, version) = match parsed.json_info {
            Some(info) => (info.profile, info.version),
            None => (None, None),
        };

        Ok(Self {
            frames: parsed.scene_info.len(),
            scenes: parsed
                .scene_info_summary
                .map(|s| s.scene_first_frame_index.len())
                .unwrap_or(0),
            profile,
            version,
        })
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| PipelineError::InvalidMetadata {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_json(&content).map_err(|e| PipelineError::InvalidMetadata {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn describe(&self) -> String {
        let mut text = format!("{} frames, {} scenes", self.frames, self.scenes);
        if let Some(profile) = &self.profile {
            text.push_str(&format!(", profile {}", profile));
        }
        if let Some(version) = &self.version {
            text.push_str(&format!(", version {}", version));
        }
        text
    }
}
