//! Per-host node table built from descriptor records.
//!
//! Hosts are kept in first-seen order; that order defines their ids.
//! Alongside each entry the table keeps the raw checkpoint list text,
//! which is what the restart output ultimately carries.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Slot counters for one record (or one host after merging)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlotCounts {
    /// Compute slots
    pub slots: u32,

    /// Daemon and launcher slots
    pub srv_slots: u32,

    /// A launcher image was seen
    pub is_launch: bool,
}

/// A single host of the source cluster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeEntry {
    /// Sequential id in first-seen order
    pub id: u32,

    /// Hostname with whitespace removed
    pub name: String,

    /// Opaque mode token from the first record for this host
    pub mode: String,

    /// Compute slots across all records
    pub slots: u32,

    /// Server slots across all records
    pub srv_slots: u32,

    /// Host carries the job launcher
    pub is_launch: bool,
}

impl NodeEntry {
    /// Total slots on this host
    pub fn total_slots(&self) -> u32 {
        self.slots + self.srv_slots
    }
}

/// Ordered hostname -> node mapping plus raw checkpoint text per host
#[derive(Debug, Clone, Default)]
pub struct NodeTable {
    nodes: Vec<NodeEntry>,
    index: HashMap<String, usize>,
    checkpoints: Vec<String>,
}

impl NodeTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one parsed record into the table
    ///
    /// A new hostname takes `*next_id` and advances the counter. A known
    /// hostname accumulates counters, ORs the launcher flag and appends
    /// `ckpts` to its raw text separated by a single space.
    pub fn merge(
        &mut self,
        hostname: String,
        mode: &str,
        counts: SlotCounts,
        ckpts: &str,
        next_id: &mut u32,
    ) {
        if let Some(&pos) = self.index.get(&hostname) {
            let entry = &mut self.nodes[pos];
            entry.slots += counts.slots;
            entry.srv_slots += counts.srv_slots;
            entry.is_launch = entry.is_launch || counts.is_launch;

            let raw = &mut self.checkpoints[pos];
            raw.push(' ');
            raw.push_str(ckpts);

            debug!("Merged record into host {} (id {})", entry.name, entry.id);
        } else {
            let id = *next_id;
            *next_id += 1;

            debug!("New host {} (id {})", hostname, id);

            self.index.insert(hostname.clone(), self.nodes.len());
            self.nodes.push(NodeEntry {
                id,
                name: hostname,
                mode: mode.to_string(),
                slots: counts.slots,
                srv_slots: counts.srv_slots,
                is_launch: counts.is_launch,
            });
            self.checkpoints.push(ckpts.to_string());
        }
    }

    /// Number of distinct hosts
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a host by name
    pub fn get(&self, hostname: &str) -> Option<&NodeEntry> {
        self.index.get(hostname).map(|&pos| &self.nodes[pos])
    }

    /// Raw checkpoint list text recorded for a host
    pub fn checkpoints(&self, hostname: &str) -> Option<&str> {
        self.index
            .get(hostname)
            .map(|&pos| self.checkpoints[pos].as_str())
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &NodeEntry> {
        self.nodes.iter()
    }

    /// Iterate entries together with their raw checkpoint text
    pub fn iter_with_checkpoints(&self) -> impl Iterator<Item = (&NodeEntry, &str)> {
        self.nodes
            .iter()
            .zip(self.checkpoints.iter().map(String::as_str))
    }

    /// Source nodes ordered by id
    ///
    /// Resource mappers index into this list.
    pub fn sorted_nodes(&self) -> Vec<&NodeEntry> {
        let mut sorted: Vec<&NodeEntry> = self.nodes.iter().collect();
        sorted.sort_by_key(|node| node.id);
        sorted
    }

    /// Compute slots over all hosts
    pub fn total_slots(&self) -> u32 {
        self.nodes.iter().map(|n| n.slots).sum()
    }

    /// Server slots over all hosts
    pub fn total_srv_slots(&self) -> u32 {
        self.nodes.iter().map(|n| n.srv_slots).sum()
    }

    /// First host that carries the job launcher
    pub fn launch_host(&self) -> Option<&NodeEntry> {
        self.nodes.iter().find(|n| n.is_launch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(slots: u32, srv_slots: u32, is_launch: bool) -> SlotCounts {
        SlotCounts { slots, srv_slots, is_launch }
    }

    #[test]
    fn test_new_hosts_take_sequential_ids() {
        let mut table = NodeTable::new();
        let mut next_id = 0;

        table.merge("n1".to_string(), "X", counts(2, 0, false), "/a /b", &mut next_id);
        table.merge("n2".to_string(), "X", counts(1, 1, true), "/c /d", &mut next_id);

        assert_eq!(next_id, 2);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("n1").unwrap().id, 0);
        assert_eq!(table.get("n2").unwrap().id, 1);
        assert_eq!(table.checkpoints("n2"), Some("/c /d"));
    }

    #[test]
    fn test_merge_existing_host() {
        let mut table = NodeTable::new();
        let mut next_id = 0;

        table.merge("n1".to_string(), "X", counts(2, 1, true), "/a", &mut next_id);
        table.merge("n1".to_string(), "Y", counts(3, 1, false), "/b", &mut next_id);

        let entry = table.get("n1").unwrap();
        assert_eq!(next_id, 1);
        assert_eq!(entry.slots, 5);
        assert_eq!(entry.srv_slots, 2);
        assert!(entry.is_launch);
        assert_eq!(entry.mode, "X");
        assert_eq!(table.checkpoints("n1"), Some("/a /b"));
    }

    #[test]
    fn test_merge_empty_list_appends_separator() {
        let mut table = NodeTable::new();
        let mut next_id = 0;

        table.merge("n1".to_string(), "X", SlotCounts::default(), "/a", &mut next_id);
        table.merge("n1".to_string(), "X", SlotCounts::default(), "", &mut next_id);

        assert_eq!(table.checkpoints("n1"), Some("/a "));
    }

    #[test]
    fn test_totals_and_launch_host() {
        let mut table = NodeTable::new();
        let mut next_id = 0;

        table.merge("n1".to_string(), "X", counts(4, 0, false), "", &mut next_id);
        table.merge("n2".to_string(), "X", counts(3, 1, true), "", &mut next_id);

        assert_eq!(table.total_slots(), 7);
        assert_eq!(table.total_srv_slots(), 1);
        assert_eq!(table.launch_host().map(|n| n.name.as_str()), Some("n2"));
        assert!(table.get("n3").is_none());
    }
}
