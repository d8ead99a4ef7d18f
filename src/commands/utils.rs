use anyhow::Result;
use std::path::PathBuf;
use crate::output::read_snapshot;
use crate::utils::config::SCHEMA_VERSION;

/// Validate a snapshot JSON file and print a summary
pub fn validate_snapshot_file(file_path: PathBuf) -> Result<()> {
    println!("Validating snapshot: {}", file_path.display());

    let snapshot = read_snapshot(&file_path)?;

    println!("✓ Valid snapshot JSON");
    println!("  Version: {}", snapshot.version);
    println!("  Descriptor valid: {}", snapshot.valid);
    println!("  Hosts: {}", snapshot.nodes.len());
    println!("  Compute slots: {}", snapshot.total_slots());
    println!("  Server slots: {}", snapshot.total_srv_slots());
    if let Some(launch) = snapshot.nodes.iter().find(|n| n.is_launch) {
        println!("  Launch host: {}", launch.name);
    }
    println!("  Generated: {}", snapshot.generated_at);

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("ckpt-discover v{}", env!("CARGO_PKG_VERSION"));
    println!("Snapshot Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Resource-manager descriptor parsing and checkpoint restart placement.");
}
