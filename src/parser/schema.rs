//! JSON snapshot schema for parsed node tables.
//!
//! A snapshot records what was discovered on the source cluster so a
//! restart can be inspected or replayed later. Schema is versioned to
//! allow future evolution.

use super::discovery::ResourceDiscovery;
use crate::aggregator::NodeEntry;
use crate::utils::config::SCHEMA_VERSION;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Top-level snapshot structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeTableSnapshot {
    /// Schema version for compatibility checking
    pub version: String,

    /// Whether any record of the descriptor parsed
    pub valid: bool,

    /// Hosts in id order
    pub nodes: Vec<NodeEntry>,

    /// Raw checkpoint list per hostname
    pub checkpoints: BTreeMap<String, String>,

    /// Timestamp when the snapshot was generated
    pub generated_at: String,
}

impl NodeTableSnapshot {
    /// Compute slots over all hosts
    pub fn total_slots(&self) -> u32 {
        self.nodes.iter().map(|n| n.slots).sum()
    }

    /// Server slots over all hosts
    pub fn total_srv_slots(&self) -> u32 {
        self.nodes.iter().map(|n| n.srv_slots).sum()
    }
}

/// Convert a parsed descriptor to snapshot format
pub fn to_snapshot(discovery: &ResourceDiscovery) -> NodeTableSnapshot {
    use chrono::Utc;

    let table = discovery.table();

    NodeTableSnapshot {
        version: SCHEMA_VERSION.to_string(),
        valid: discovery.is_valid(),
        nodes: table.sorted_nodes().into_iter().cloned().collect(),
        checkpoints: table
            .iter_with_checkpoints()
            .map(|(node, ckpts)| (node.name.clone(), ckpts.to_string()))
            .collect(),
        generated_at: Utc::now().to_rfc3339(),
    }
}
