// file: src/pipeline/cleanup.rs
// description: removal of the intermediate transcode

use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Deletes the intermediate file if present. Returns whether a file was
/// removed; an absent file is not an error and touches nothing.
pub fn remove_intermediate(path: &Path) -> io::Result<bool> {
    if !path.exists() {
        debug!("No intermediate file at {}", path.display());
        return Ok(false);
    }

    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}
