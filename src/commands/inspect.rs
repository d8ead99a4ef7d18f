//! Inspect command: dump the parsed node table as a JSON snapshot.

use super::input::read_descriptor;
use super::models::InspectArgs;
use crate::output::{snapshot_to_string, write_snapshot};
use crate::parser::{to_snapshot, ResourceDiscovery};
use anyhow::{Context, Result};
use log::warn;

/// Execute the inspect command
pub fn execute_inspect(args: InspectArgs) -> Result<()> {
    let descriptor = read_descriptor(&args.source).context("Failed to load descriptor")?;

    let discovery = ResourceDiscovery::new(&descriptor);
    if !discovery.is_valid() {
        warn!("Descriptor contains no valid host records");
    }

    let snapshot = to_snapshot(&discovery);

    match args.output {
        Some(path) => write_snapshot(&snapshot, &path)
            .with_context(|| format!("Failed to write snapshot to {}", path.display()))?,
        None => println!("{}", snapshot_to_string(&snapshot)?),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::models::DescriptorSource;
    use crate::output::read_snapshot;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_inspect_writes_snapshot() {
        let mut input = NamedTempFile::new().unwrap();
        write!(input, "hdr::a:X:/p/ckpt_orted.0 /p/ckpt_app.1").unwrap();
        let temp_dir = tempfile::tempdir().unwrap();
        let output = temp_dir.path().join("snapshot.json");

        execute_inspect(InspectArgs {
            source: DescriptorSource::File(input.path().to_path_buf()),
            output: Some(output.clone()),
        })
        .unwrap();

        let snapshot = read_snapshot(&output).unwrap();
        assert!(snapshot.valid);
        assert_eq!(snapshot.nodes.len(), 1);
        assert_eq!(snapshot.nodes[0].srv_slots, 1);
        assert!(!snapshot.nodes[0].is_launch);
    }
}
