//! Top-level descriptor parser.
//!
//! A descriptor looks like
//! `<preamble>::<host>:<mode>:<ckpts>::<host>:<mode>:<ckpts>...`.
//! The preamble is discarded, every following `::`-delimited segment is
//! a host record, and text after the last delimiter is parsed as a final
//! record.

use super::record::add_host;
use crate::aggregator::NodeTable;
use crate::utils::config::RECORD_DELIMITER;
use log::debug;

/// Parsed resource-manager descriptor
///
/// Construction never fails. Check [`ResourceDiscovery::is_valid`]
/// before using the table: it is true only if at least one record
/// parsed.
#[derive(Debug, Clone, Default)]
pub struct ResourceDiscovery {
    table: NodeTable,
    valid: bool,
}

impl ResourceDiscovery {
    /// Parse a descriptor into a node table
    pub fn new(descriptor: &str) -> Self {
        let mut discovery = Self::default();
        let mut next_id: u32 = 0;

        let Some(first) = descriptor.find(RECORD_DELIMITER) else {
            debug!("Descriptor has no record delimiter, nothing to parse");
            return discovery;
        };

        let mut start = first + RECORD_DELIMITER.len();
        while let Some(offset) = descriptor[start..].find(RECORD_DELIMITER) {
            let record = &descriptor[start..start + offset];
            if !record.is_empty() {
                discovery.add_record(record, &mut next_id);
            }
            start += offset + RECORD_DELIMITER.len();
        }

        // Trailing record without a closing delimiter
        if start < descriptor.len() {
            discovery.add_record(&descriptor[start..], &mut next_id);
        }

        debug!(
            "Parsed descriptor: {} hosts, {} compute slots, {} server slots, valid={}",
            discovery.table.len(),
            discovery.table.total_slots(),
            discovery.table.total_srv_slots(),
            discovery.valid
        );

        discovery
    }

    fn add_record(&mut self, record: &str, next_id: &mut u32) {
        if add_host(&mut self.table, record, next_id) {
            self.valid = true;
        }
    }

    /// True once any record has been parsed successfully
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Parsed node table
    pub fn table(&self) -> &NodeTable {
        &self.table
    }

    /// Take ownership of the node table
    pub fn into_table(self) -> NodeTable {
        self.table
    }
}
