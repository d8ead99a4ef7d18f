//! Target node list parsing.
//!
//! Accepted form: entries separated by commas or whitespace, each either
//! `name` or `name=id`. Entries without an explicit id take their
//! position in the list.

use crate::utils::error::TargetError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A node of the restart cluster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetNode {
    /// Hostname used in the legacy output
    pub name: String,

    /// Stable id used to key lines of the new output
    pub id: u32,
}

impl TargetNode {
    pub fn new(name: impl Into<String>, id: u32) -> Self {
        Self { name: name.into(), id }
    }
}

/// Parse a target node list
///
/// # Errors
/// * `TargetError::Empty` - no entries
/// * `TargetError::InvalidEntry` - empty name or non-numeric id
/// * `TargetError::DuplicateId` - two entries share an id
pub fn parse_targets(list: &str) -> Result<Vec<TargetNode>, TargetError> {
    let mut targets = Vec::new();
    let mut seen = HashSet::new();

    let entries = list
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|e| !e.is_empty());

    for (position, entry) in entries.enumerate() {
        let (name, id) = match entry.split_once('=') {
            Some((name, id)) => {
                let id = id
                    .parse::<u32>()
                    .map_err(|_| TargetError::InvalidEntry(entry.to_string()))?;
                (name, id)
            }
            None => (entry, position as u32),
        };

        if name.is_empty() {
            return Err(TargetError::InvalidEntry(entry.to_string()));
        }
        if !seen.insert(id) {
            return Err(TargetError::DuplicateId(id));
        }

        targets.push(TargetNode::new(name, id));
    }

    if targets.is_empty() {
        return Err(TargetError::Empty);
    }

    Ok(targets)
}
