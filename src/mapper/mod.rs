//! Placement of source nodes onto a target node set.
//!
//! The serializers only see the result of a [`ResourceMapper`]: for each
//! target index, the ordered list of source nodes relocated there.
//! Source indices refer to [`NodeTable::sorted_nodes`].
//!
//! [`NodeTable::sorted_nodes`]: crate::aggregator::NodeTable::sorted_nodes

pub mod sequential;
pub mod targets;

pub use sequential::SequentialMapper;
pub use targets::{parse_targets, TargetNode};

use crate::aggregator::NodeEntry;

/// `mapping[i]` lists source indices placed on target `i`
pub type Mapping = Vec<Vec<usize>>;

/// Result of a successful mapping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapOutcome {
    pub mapping: Mapping,

    /// Non-empty when the placement is degraded in some way
    pub warning: String,
}

/// Decides where source nodes are restarted
pub trait ResourceMapper {
    /// Map `sources` onto `targets`
    ///
    /// Returns `None` if no placement is possible.
    fn map_to(&self, sources: &[&NodeEntry], targets: &[TargetNode]) -> Option<MapOutcome>;
}
