//! Round-robin placement in source id order.

use super::{MapOutcome, ResourceMapper, TargetNode};
use crate::aggregator::NodeEntry;
use log::debug;

/// Places source node `k` on target `k % targets.len()`
///
/// With as many targets as sources this is the identity mapping.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialMapper;

impl ResourceMapper for SequentialMapper {
    fn map_to(&self, sources: &[&NodeEntry], targets: &[TargetNode]) -> Option<MapOutcome> {
        if targets.is_empty() {
            debug!("No target nodes to map {} sources onto", sources.len());
            return None;
        }

        let mut mapping = vec![Vec::new(); targets.len()];
        for k in 0..sources.len() {
            mapping[k % targets.len()].push(k);
        }

        let warning = if sources.len() > targets.len() {
            format!(
                "{} source nodes packed onto {} target nodes",
                sources.len(),
                targets.len()
            )
        } else {
            String::new()
        };

        Some(MapOutcome { mapping, warning })
    }
}
