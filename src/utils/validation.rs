// file: src/utils/validation.rs
// description: input and filesystem validation helpers
// reference: input validation patterns

use crate::error::{PipelineError, Result};
use std::path::Path;

pub struct Validator;

impl Validator {
    /// The source must be an existing regular file.
    pub fn validate_input_file(path: &Path) -> Result<()> {
        if !path.is_file() {
            return Err(PipelineError::InputNotFound(path.to_path_buf()));
        }

        Ok(())
    }

    pub fn validate_tools_directory(path: &Path) -> Result<()> {
        if !path.is_dir() {
            return Err(PipelineError::MissingToolsDirectory(path.to_path_buf()));
        }

        Ok(())
    }

    pub fn validate_output_directory(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(PipelineError::Config(format!(
                "Output directory does not exist: {}",
                path.display()
            )));
        }

        if !path.is_dir() {
            return Err(PipelineError::Config(format!(
                "Output path is not a directory: {}",
                path.display()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_validate_input_file() {
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("movie.mkv");
        fs::write(&file_path, "av1").unwrap();

        assert!(Validator::validate_input_file(&file_path).is_ok());
        assert!(matches!(
            Validator::validate_input_file(&temp.path().join("missing.mkv")),
            Err(PipelineError::InputNotFound(_))
        ));
    }

    #[test]
    fn test_directory_is_not_an_input_file() {
        let temp = TempDir::new().unwrap();
        assert!(matches!(
            Validator::validate_input_file(temp.path()),
            Err(PipelineError::InputNotFound(_))
        ));
    }

    #[test]
    fn test_validate_tools_directory() {
        let temp = TempDir::new().unwrap();
        assert!(Validator::validate_tools_directory(temp.path()).is_ok());
        assert!(matches!(
            Validator::validate_tools_directory(&temp.path().join("tools")),
            Err(PipelineError::MissingToolsDirectory(_))
        ));
    }

    #[test]
    fn test_validate_output_directory() {
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("not_a_dir");
        fs::write(&file_path, "").unwrap();

        assert!(Validator::validate_output_directory(temp.path()).is_ok());
        assert!(Validator::validate_output_directory(&file_path).is_err());
        assert!(Validator::validate_output_directory(&temp.path().join("nope")).is_err());
    }
}
