use crate::output::OutputFormat;
use crate::utils::config::{DEFAULT_DESCRIPTOR_ENV, DEFAULT_OUTPUT_VAR};
use std::path::PathBuf;

/// Where the descriptor text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptorSource {
    /// Read from a file
    File(PathBuf),

    /// Read from standard input
    Stdin,

    /// Read from an environment variable
    Env(String),
}

impl DescriptorSource {
    /// Build a source from CLI options
    ///
    /// An input path of `-` means stdin; no input path means the
    /// environment variable.
    pub fn from_args(input: Option<PathBuf>, env_var: String) -> Self {
        match input {
            Some(path) if path.as_os_str() == "-" => DescriptorSource::Stdin,
            Some(path) => DescriptorSource::File(path),
            None => DescriptorSource::Env(env_var),
        }
    }
}

impl Default for DescriptorSource {
    fn default() -> Self {
        DescriptorSource::Env(DEFAULT_DESCRIPTOR_ENV.to_string())
    }
}

/// Arguments for the remap command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct RemapArgs {
    /// Descriptor input
    pub source: DescriptorSource,

    /// Target node list (`name` or `name=id`, comma separated)
    pub targets: String,

    /// Output layout
    pub format: OutputFormat,

    /// Variable name for the placement output
    pub var: String,
}

impl Default for RemapArgs {
    fn default() -> Self {
        Self {
            source: DescriptorSource::default(),
            targets: String::new(),
            format: OutputFormat::New,
            var: DEFAULT_OUTPUT_VAR.to_string(),
        }
    }
}

/// Arguments for the inspect command
#[derive(Debug, Clone, Default)]
pub struct InspectArgs {
    /// Descriptor input
    pub source: DescriptorSource,

    /// Write the snapshot here instead of stdout
    pub output: Option<PathBuf>,
}
