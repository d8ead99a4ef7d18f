//! ckpt-discover CLI
//!
//! Turns a resource-manager descriptor into restart placement variables
//! for `eval` in restart scripts.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use ckpt_discover::commands::{
    display_version, execute_inspect, execute_remap, validate_snapshot_file, DescriptorSource,
    InspectArgs, RemapArgs,
};
use ckpt_discover::output::OutputFormat;
use ckpt_discover::utils::config::{DEFAULT_DESCRIPTOR_ENV, DEFAULT_OUTPUT_VAR};

/// ckpt-discover - checkpoint restart placement for resource managers
#[derive(Parser, Debug)]
#[command(name = "ckpt-discover")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Map discovered checkpoints onto target nodes and print placement variables
    Remap {
        /// Descriptor file ("-" for stdin); read from --from-env if omitted
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Environment variable holding the descriptor
        #[arg(long, default_value = DEFAULT_DESCRIPTOR_ENV)]
        from_env: String,

        /// Target nodes: comma separated `name` or `name=id`
        #[arg(short, long, env = "DMTCP_RM_TARGETS")]
        targets: String,

        /// Output layout
        #[arg(short, long, value_enum, default_value = "new")]
        format: OutputFormat,

        /// Variable name for the placement output
        #[arg(long, default_value = DEFAULT_OUTPUT_VAR)]
        var: String,
    },

    /// Print or write the parsed node table as JSON
    Inspect {
        /// Descriptor file ("-" for stdin); read from --from-env if omitted
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Environment variable holding the descriptor
        #[arg(long, default_value = DEFAULT_DESCRIPTOR_ENV)]
        from_env: String,

        /// Output path for the JSON snapshot (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a snapshot JSON file
    Validate {
        /// Path to snapshot JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging (stderr, stdout is for eval)
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Remap {
            input,
            from_env,
            targets,
            format,
            var,
        } => {
            execute_remap(RemapArgs {
                source: DescriptorSource::from_args(input, from_env),
                targets,
                format,
                var,
            })?;
        }

        Commands::Inspect {
            input,
            from_env,
            output,
        } => {
            execute_inspect(InspectArgs {
                source: DescriptorSource::from_args(input, from_env),
                output,
            })?;
        }

        Commands::Validate { file } => {
            validate_snapshot_file(file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
