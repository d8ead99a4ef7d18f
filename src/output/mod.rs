//! Output writers for restart placement and node table snapshots.
//!
//! This module handles:
//! - Shell-evaluable placement variables (legacy and new layouts)
//! - JSON snapshots of the parsed node table

pub mod env;
pub mod json;

// Re-export main functions
pub use env::{writeout, writeout_new, writeout_old, OutputFormat};
pub use json::{read_snapshot, snapshot_to_string, write_snapshot};

use crate::utils::error::OutputError;
use std::path::Path;

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path_empty() {
        assert!(validate_path(Path::new("")).is_err());
    }

    #[test]
    fn test_validate_path_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(validate_path(temp_dir.path()).is_err());
    }
}
