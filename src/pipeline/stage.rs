// file: src/pipeline/stage.rs
// description: pipeline stage identifiers used for transitions and failure reports

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Validating,
    Transcoding,
    Extracting,
    Plotting,
    CleaningUp,
    Done,
    Failed,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Validating => "validation",
            Stage::Transcoding => "transcode",
            Stage::Extracting => "metadata extraction",
            Stage::Plotting => "plot",
            Stage::CleaningUp => "cleanup",
            Stage::Done => "done",
            Stage::Failed => "failed",
        }
    }

    /// Successor on the happy path. Terminal stages return themselves.
    pub fn next(self) -> Stage {
        match self {
            Stage::Validating => Stage::Transcoding,
            Stage::Transcoding => Stage::Extracting,
            Stage::Extracting => Stage::Plotting,
            Stage::Plotting => Stage::CleaningUp,
            Stage::CleaningUp => Stage::Done,
            Stage::Done => Stage::Done,
            Stage::Failed => Stage::Failed,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Stage::Done | Stage::Failed)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path_order() {
        let mut stage = Stage::Validating;
        let mut seen = vec![stage];
        while !stage.is_terminal() {
            stage = stage.next();
            seen.push(stage);
        }

        assert_eq!(
            seen,
            vec![
                Stage::Validating,
                Stage::Transcoding,
                Stage::Extracting,
                Stage::Plotting,
                Stage::CleaningUp,
                Stage::Done,
            ]
        );
    }

    #[test]
    fn test_failed_is_terminal() {
        assert!(Stage::Failed.is_terminal());
        assert_eq!(Stage::Failed.next(), Stage::Failed);
    }
}
