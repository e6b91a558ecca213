// file: src/models/job.rs
// description: output file naming derived from the input file's base name
// reference: internal data structures

use std::path::{Path, PathBuf};

pub const INTERMEDIATE_SUFFIX: &str = "__encoded.hevc.mkv";
pub const METADATA_SUFFIX: &str = ".hdr10plus.json";
pub const PLOT_SUFFIX: &str = ".hdr10plus_plot.png";

/// File names for one job, before they are placed in an output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedNames {
    pub intermediate: String,
    pub metadata: String,
    pub plot: String,
}

/// Every path a job touches. Computed once at startup, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobPaths {
    pub input: PathBuf,
    pub intermediate: PathBuf,
    pub metadata: PathBuf,
    pub plot: PathBuf,
}

/// Names depend only on the input's base name; the extension and any parent
/// directories are dropped.
pub fn derive_names(input: &Path) -> DerivedNames {
    let base = input
        .file_stem()
        .unwrap_or(input.as_os_str())
        .to_string_lossy();

    DerivedNames {
        intermediate: format!("{base}{INTERMEDIATE_SUFFIX}"),
        metadata: format!("{base}{METADATA_SUFFIX}"),
        plot: format!("{base}{PLOT_SUFFIX}"),
    }
}

impl JobPaths {
    pub fn new(input: &Path, output_dir: &Path) -> Self {
        let names = derive_names(input);

        Self {
            input: input.to_path_buf(),
            intermediate: output_dir.join(names.intermediate),
            metadata: output_dir.join(names.metadata),
            plot: output_dir.join(names.plot),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_derive_names_from_base_name() {
        assert_eq!(
            derive_names(Path::new("movie.mkv")),
            DerivedNames {
                intermediate: "movie__encoded.hevc.mkv".to_string(),
                metadata: "movie.hdr10plus.json".to_string(),
                plot: "movie.hdr10plus_plot.png".to_string(),
            }
        );
    }

    #[test]
    fn test_derive_names_ignores_parent_directories() {
        let names = derive_names(Path::new("/media/netflix/Show.S01E01.mkv"));
        assert_eq!(names.intermediate, "Show.S01E01__encoded.hevc.mkv");
        assert_eq!(names.metadata, "Show.S01E01.hdr10plus.json");
    }

    #[test]
    fn test_derive_names_without_extension() {
        let names = derive_names(Path::new("capture"));
        assert_eq!(names.plot, "capture.hdr10plus_plot.png");
    }

    #[test]
    fn test_job_paths_join_output_dir() {
        let paths = JobPaths::new(Path::new("in/movie.mkv"), Path::new("out"));
        assert_eq!(paths.input, PathBuf::from("in/movie.mkv"));
        assert_eq!(paths.intermediate, PathBuf::from("out/movie__encoded.hevc.mkv"));
        assert_eq!(paths.metadata, PathBuf::from("out/movie.hdr10plus.json"));
        assert_eq!(paths.plot, PathBuf::from("out/movie.hdr10plus_plot.png"));
    }
}
