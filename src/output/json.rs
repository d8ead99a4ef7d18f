//! JSON snapshot writer.
//!
//! Writes NodeTableSnapshot structs to JSON files with proper formatting.

use super::validate_path;
use crate::parser::schema::NodeTableSnapshot;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Write a snapshot to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_snapshot(
    snapshot: &NodeTableSnapshot,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing snapshot to: {}", output_path.display());

    validate_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, snapshot)?;

    info!("Snapshot written successfully ({} hosts)", snapshot.nodes.len());

    Ok(())
}

/// Serialize a snapshot to a pretty JSON string
pub fn snapshot_to_string(snapshot: &NodeTableSnapshot) -> Result<String, OutputError> {
    Ok(serde_json::to_string_pretty(snapshot)?)
}

/// Read a snapshot from a JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_snapshot(input_path: impl AsRef<Path>) -> Result<NodeTableSnapshot, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading snapshot from: {}", input_path.display());

    let file = File::open(input_path)?;
    let snapshot: NodeTableSnapshot = serde_json::from_reader(BufReader::new(file))?;

    debug!(
        "Snapshot loaded: version {}, {} hosts",
        snapshot.version,
        snapshot.nodes.len()
    );

    Ok(snapshot)
}
