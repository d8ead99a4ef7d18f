//! Configuration and constants for descriptor parsing and output.

/// Current snapshot schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

// Descriptor grammar
// <preamble> "::" <host>:<mode>:<ckpt> ("::" <host>:<mode>:<ckpt>)*
pub const RECORD_DELIMITER: &str = "::";
pub const FIELD_DELIMITER: char = ':';
pub const TOKEN_DELIMITER: char = ' ';
pub const PATH_SEPARATOR: char = '/';

/// Characters removed from anywhere inside a hostname
pub const HOSTNAME_STRIP_CHARS: &str = " \n\t";

/// Characters removed from anywhere inside a checkpoint list
pub const CKPT_LIST_STRIP_CHARS: &str = "\n";

/// Every checkpoint image basename carries this prefix before the process name
pub const CKPT_MARKER_PREFIX: &str = "ckpt_";

// Process names recognised in checkpoint image names.
// Daemons hold a server slot; launchers also start the parallel job.
pub const DAEMON_PROCESS_NAMES: &[&str] = &["orted"];
pub const LAUNCHER_PROCESS_NAMES: &[&str] = &["orterun", "mpiexec", "mpirun"];

/// Reserved variable carrying the resource mapper warning
pub const WARNING_VAR: &str = "DMTCP_DISCOVER_RM_WARNING";

/// Default variable name used for the restart placement output
pub const DEFAULT_OUTPUT_VAR: &str = "DMTCP_REMLAUNCH_NODES";

/// Environment variable the CLI reads the descriptor from by default
pub const DEFAULT_DESCRIPTOR_ENV: &str = "DMTCP_RM_DESCRIPTOR";
