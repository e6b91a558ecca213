// file: src/models/tool.rs
// description: external tool identifiers and platform executable naming
// reference: internal data structures

use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    HandBrake,
    Ffmpeg,
    Hdr10PlusTool,
}

impl Tool {
    pub const ALL: [Tool; 3] = [Tool::HandBrake, Tool::Ffmpeg, Tool::Hdr10PlusTool];

    pub fn name(self) -> &'static str {
        match self {
            Tool::HandBrake => "HandBrakeCLI",
            Tool::Ffmpeg => "ffmpeg",
            Tool::Hdr10PlusTool => "hdr10plus_tool",
        }
    }

    /// Executable file name for the target platform, e.g. `ffmpeg.exe` on
    /// Windows and `ffmpeg` elsewhere.
    pub fn file_name(self) -> String {
        executable_file_name(self.name(), std::env::consts::EXE_SUFFIX)
    }

    pub fn expected_path(self, tools_dir: &Path) -> PathBuf {
        tools_dir.join(self.file_name())
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn executable_file_name(name: &str, exe_suffix: &str) -> String {
    format!("{name}{exe_suffix}")
}

/// A tool whose executable was found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTool {
    pub tool: Tool,
    pub path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_executable_file_name_per_platform() {
        assert_eq!(executable_file_name("HandBrakeCLI", ".exe"), "HandBrakeCLI.exe");
        assert_eq!(executable_file_name("hdr10plus_tool", ""), "hdr10plus_tool");
    }

    #[test]
    fn test_expected_path_uses_tools_dir() {
        let path = Tool::Ffmpeg.expected_path(Path::new("tools"));
        assert_eq!(path, Path::new("tools").join(Tool::Ffmpeg.file_name()));
        assert!(Tool::Ffmpeg.file_name().starts_with("ffmpeg"));
    }

    #[test]
    fn test_display_uses_tool_name() {
        assert_eq!(Tool::HandBrake.to_string(), "HandBrakeCLI");
        assert_eq!(Tool::ALL.len(), 3);
    }
}
