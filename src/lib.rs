//! ckpt-discover
//!
//! Parses the node/slot/checkpoint descriptor produced by a cluster
//! resource manager and writes the restart placement of those
//! checkpoints onto a target node set as shell-evaluable variables.
//!
//! ## Getting Started
//!
//! ```
//! use ckpt_discover::mapper::{SequentialMapper, TargetNode};
//! use ckpt_discover::output::writeout_new;
//! use ckpt_discover::parser::ResourceDiscovery;
//!
//! let discovery = ResourceDiscovery::new("hdr::node1:X:/ckpt/ckpt_mpirun_1.dmtcp");
//! assert!(discovery.is_valid());
//!
//! let targets = vec![TargetNode::new("spare1", 0)];
//! let mut out = Vec::new();
//! writeout_new(&mut out, "NODES", discovery.table(), &targets, &SequentialMapper).unwrap();
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "NODES_IDS='1'\nNODES_0='/ckpt/ckpt_mpirun_1.dmtcp '\n"
//! );
//! ```

pub mod aggregator;
pub mod commands;
pub mod mapper;
pub mod output;
pub mod parser;
pub mod utils;
