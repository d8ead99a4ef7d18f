//! Shell-evaluable restart placement output.
//!
//! Two layouts are supported. Both are consumed by `eval` in the restart
//! scripts, so the exact text matters.
//!
//! Legacy layout, one line per populated target:
//! ```text
//! VAR='
//! :: target-host :mode: /ckpt/a /ckpt/b
//! '
//! ```
//!
//! New layout, one line per target keyed by target id:
//! ```text
//! VAR_IDS='2'
//! VAR_0='/ckpt/a /ckpt/b '
//! VAR_1=''
//! ```
//!
//! Either layout is preceded by `DMTCP_DISCOVER_RM_WARNING='...'` when the
//! mapper reports a warning.

use crate::aggregator::{NodeEntry, NodeTable};
use crate::mapper::{MapOutcome, ResourceMapper, TargetNode};
use crate::utils::config::WARNING_VAR;
use crate::utils::error::OutputError;
use log::{debug, warn};
use std::io::Write;

/// Output layout selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Single quoted block with hostname-keyed lines
    Old,
    /// Count line plus one id-keyed variable per target
    New,
}

/// Write the placement in the chosen layout
///
/// Returns `Ok(false)` without writing anything when the mapper fails.
pub fn writeout<W: Write>(
    format: OutputFormat,
    out: &mut W,
    var: &str,
    table: &NodeTable,
    targets: &[TargetNode],
    mapper: &dyn ResourceMapper,
) -> Result<bool, OutputError> {
    match format {
        OutputFormat::Old => writeout_old(out, var, table, targets, mapper),
        OutputFormat::New => writeout_new(out, var, table, targets, mapper),
    }
}

/// Write the legacy layout
///
/// Targets that receive no source node produce no line. The mode on each
/// line is that of the first source node mapped to the target.
pub fn writeout_old<W: Write>(
    out: &mut W,
    var: &str,
    table: &NodeTable,
    targets: &[TargetNode],
    mapper: &dyn ResourceMapper,
) -> Result<bool, OutputError> {
    validate_var_name(var)?;

    let sources = table.sorted_nodes();
    let Some(outcome) = map_sources(&sources, targets, mapper) else {
        return Ok(false);
    };

    write_warning(out, &outcome.warning)?;

    writeln!(out, "{}='", var)?;
    for (target, indices) in targets.iter().zip(&outcome.mapping) {
        let mapped = resolve(&sources, indices);
        let Some(first) = mapped.first() else {
            continue;
        };

        write!(out, ":: {} :{}: ", target.name, first.mode)?;
        for node in &mapped {
            write!(out, "{}", table.checkpoints(&node.name).unwrap_or_default())?;
        }
        writeln!(out)?;
    }
    writeln!(out, "'")?;

    Ok(true)
}

/// Write the new layout
///
/// Every target gets a line, including targets with no source nodes.
pub fn writeout_new<W: Write>(
    out: &mut W,
    var: &str,
    table: &NodeTable,
    targets: &[TargetNode],
    mapper: &dyn ResourceMapper,
) -> Result<bool, OutputError> {
    validate_var_name(var)?;

    let sources = table.sorted_nodes();
    let Some(outcome) = map_sources(&sources, targets, mapper) else {
        return Ok(false);
    };

    write_warning(out, &outcome.warning)?;

    writeln!(out, "{}_IDS='{}'", var, targets.len())?;
    for (target, indices) in targets.iter().zip(&outcome.mapping) {
        write!(out, "{}_{}='", var, target.id)?;
        for node in resolve(&sources, indices) {
            write!(out, "{} ", table.checkpoints(&node.name).unwrap_or_default())?;
        }
        writeln!(out, "'")?;
    }

    Ok(true)
}

/// Run the mapper and check the shape of its result
fn map_sources(
    sources: &[&NodeEntry],
    targets: &[TargetNode],
    mapper: &dyn ResourceMapper,
) -> Option<MapOutcome> {
    let mut outcome = mapper.map_to(sources, targets)?;

    if outcome.mapping.len() != targets.len() {
        warn!(
            "Mapper returned {} entries for {} targets",
            outcome.mapping.len(),
            targets.len()
        );
        outcome.mapping.resize(targets.len(), Vec::new());
    }

    debug!(
        "Mapped {} source nodes onto {} targets",
        sources.len(),
        targets.len()
    );

    Some(outcome)
}

/// Look up mapped source nodes, skipping indices out of range
fn resolve<'a>(sources: &[&'a NodeEntry], indices: &[usize]) -> Vec<&'a NodeEntry> {
    indices
        .iter()
        .filter_map(|&k| {
            let node = sources.get(k).copied();
            if node.is_none() {
                warn!("Mapper referenced unknown source node {}", k);
            }
            node
        })
        .collect()
}

fn write_warning<W: Write>(out: &mut W, warning: &str) -> Result<(), OutputError> {
    if !warning.is_empty() {
        writeln!(out, "{}='{}'", WARNING_VAR, warning)?;
    }
    Ok(())
}

/// Variable names must be valid shell identifiers
fn validate_var_name(var: &str) -> Result<(), OutputError> {
    let mut chars = var.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');

    if valid_start && chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        Ok(())
    } else {
        Err(OutputError::InvalidVarName(var.to_string()))
    }
}
