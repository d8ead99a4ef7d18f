//! Descriptor parsing and snapshot schema definitions.
//!
//! This module handles:
//! - Splitting the descriptor into host records
//! - Splitting records into hostname, mode and checkpoint list
//! - Classifying checkpoint images into slot roles
//! - Defining the JSON snapshot schema

pub mod discovery;
pub mod record;
pub mod schema;
pub mod slot;
pub mod trim;

// Re-export main types
pub use discovery::ResourceDiscovery;
pub use record::{add_host, count_slots, extract_basename, split_record, HostRecord};
pub use schema::{to_snapshot, NodeTableSnapshot};
pub use slot::{classify, is_launch_process, is_server_slot, SlotRole};
pub use trim::strip_all;
