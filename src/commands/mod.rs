//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod input;
pub mod inspect;
pub mod models;
pub mod remap;
pub mod utils;

// Re-export main command functions
pub use input::read_descriptor;
pub use inspect::execute_inspect;
pub use models::{DescriptorSource, InspectArgs, RemapArgs};
pub use remap::{execute_remap, remap_to};
pub use utils::{display_version, validate_snapshot_file};
