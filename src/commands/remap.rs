//! Remap command implementation.
//!
//! The remap command:
//! 1. Loads the descriptor
//! 2. Parses it into a node table
//! 3. Parses the target node list
//! 4. Maps source nodes onto targets
//! 5. Prints the placement variables to stdout

use super::input::read_descriptor;
use super::models::RemapArgs;
use crate::mapper::{parse_targets, ResourceMapper, SequentialMapper};
use crate::output::writeout;
use crate::parser::ResourceDiscovery;
use anyhow::{bail, Context, Result};
use log::{debug, info};
use std::io::Write;

/// Execute the remap command, writing to stdout
pub fn execute_remap(args: RemapArgs) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    remap_to(&args, &SequentialMapper, &mut out)?;
    out.flush().context("Failed to flush output")?;
    Ok(())
}

/// Run the remap pipeline with an explicit mapper and sink
///
/// **Public** - lets callers plug in their own placement policy
pub fn remap_to<W: Write>(args: &RemapArgs, mapper: &dyn ResourceMapper, out: &mut W) -> Result<()> {
    let descriptor = read_descriptor(&args.source).context("Failed to load descriptor")?;

    let discovery = ResourceDiscovery::new(&descriptor);
    if !discovery.is_valid() {
        bail!("Descriptor contains no valid host records");
    }

    let table = discovery.table();
    info!(
        "Discovered {} hosts ({} compute slots, {} server slots)",
        table.len(),
        table.total_slots(),
        table.total_srv_slots()
    );

    if let Some(launch) = table.launch_host() {
        debug!("Job launcher was on {}", launch.name);
    }

    let targets = parse_targets(&args.targets).context("Invalid target node list")?;
    debug!("Remapping onto {} target nodes", targets.len());

    let written = writeout(args.format, out, &args.var, table, &targets, mapper)
        .context("Failed to write placement")?;
    if !written {
        bail!("Resource mapper could not place source nodes on targets");
    }

    Ok(())
}
