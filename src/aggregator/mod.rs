//! Aggregation of descriptor records into a per-host node table.
//!
//! This module owns:
//! - Host identity assignment (first-seen order)
//! - Slot counter merging across records
//! - Raw checkpoint text per host

pub mod node_table;

// Re-export main types
pub use node_table::{NodeEntry, NodeTable, SlotCounts};
