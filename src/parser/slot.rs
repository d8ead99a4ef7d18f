//! Classification of checkpoint images into process roles.
//!
//! A checkpoint image is named after the process it was taken from
//! (`ckpt_<process>_<suffix>.dmtcp`). Resource-manager daemons and job
//! launchers occupy "server" slots; everything else is a compute slot.
//! Matching is plain substring search so decorated names still classify.

use crate::utils::config::{CKPT_MARKER_PREFIX, DAEMON_PROCESS_NAMES, LAUNCHER_PROCESS_NAMES};
use serde::{Deserialize, Serialize};

/// Role of the process a checkpoint image belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotRole {
    /// Ordinary application rank
    Compute,
    /// Resource-manager daemon (e.g. `orted`)
    Server,
    /// Server slot that also launches the parallel job
    Launcher,
}

impl SlotRole {
    /// Whether this role occupies a server slot
    pub fn is_server(self) -> bool {
        matches!(self, SlotRole::Server | SlotRole::Launcher)
    }

    /// Whether this role starts the parallel job
    pub fn is_launcher(self) -> bool {
        self == SlotRole::Launcher
    }
}

/// Check whether `basename` carries the marker of any process in `names`
fn has_marker(basename: &str, names: &[&str]) -> bool {
    names
        .iter()
        .any(|name| basename.contains(&format!("{}{}", CKPT_MARKER_PREFIX, name)))
}

/// Classify a checkpoint image basename
///
/// Launcher markers win over daemon markers.
pub fn classify(basename: &str) -> SlotRole {
    if has_marker(basename, LAUNCHER_PROCESS_NAMES) {
        SlotRole::Launcher
    } else if has_marker(basename, DAEMON_PROCESS_NAMES) {
        SlotRole::Server
    } else {
        SlotRole::Compute
    }
}

/// True if the image belongs to a daemon or launcher process
pub fn is_server_slot(basename: &str) -> bool {
    classify(basename).is_server()
}

/// True if the image belongs to a job launcher (`orterun`, `mpiexec`, `mpirun`)
pub fn is_launch_process(basename: &str) -> bool {
    classify(basename).is_launcher()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_roles() {
        assert_eq!(classify("ckpt_orted_1a2b.dmtcp"), SlotRole::Server);
        assert_eq!(classify("ckpt_mpirun_1a2b.dmtcp"), SlotRole::Launcher);
        assert_eq!(classify("ckpt_orterun_77.dmtcp"), SlotRole::Launcher);
        assert_eq!(classify("ckpt_mpiexec.0"), SlotRole::Launcher);
        assert_eq!(classify("ckpt_a.out_1a2b.dmtcp"), SlotRole::Compute);
    }

    #[test]
    fn test_marker_must_follow_prefix() {
        // the bare process name is not enough
        assert!(!is_server_slot("mpirun.dmtcp"));
        assert!(!is_server_slot("ckpt-orted.dmtcp"));
        // decorated names still match
        assert!(is_server_slot("2024_ckpt_orted_host.dmtcp"));
        assert!(is_server_slot("ckpt_ckpt_mpirun"));
    }

    #[test]
    fn test_launcher_implies_server() {
        for name in ["ckpt_orterun", "ckpt_mpiexec.1", "x_ckpt_mpirun_y"] {
            assert!(is_launch_process(name));
            assert!(is_server_slot(name));
        }
        assert!(is_server_slot("ckpt_orted.0"));
        assert!(!is_launch_process("ckpt_orted.0"));
    }
}
