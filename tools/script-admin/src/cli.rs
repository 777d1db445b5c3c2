//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Manage signed synthetic-monitor scripts
#[derive(Parser, Debug)]
#[command(name = "monitor-script")]
#[command(about = "Create, read, update, delete and import signed monitor scripts")]
pub struct Cli {
    /// TOML configuration file (environment variables override it)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter, e.g. "info" or "monitor_script=debug"
    #[arg(long, global = true, env = "RUST_LOG", default_value = "warn")]
    pub log: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Attach a script to a monitor (overwrites any existing script)
    Create(ScriptArgs),
    /// Replace the script of a managed monitor
    Update {
        #[command(flatten)]
        script: ScriptArgs,
        /// Monitor id currently managed, when moving the script to a new monitor
        #[arg(long)]
        from: Option<String>,
    },
    /// Refresh a script from the remote
    Read {
        monitor_id: String,
    },
    /// Blank the script attached to a monitor
    Delete {
        monitor_id: String,
    },
    /// Adopt an existing monitor's script
    Import {
        monitor_id: String,
    },
    /// Print the signed payload without contacting the remote
    Sign {
        /// Script file ("-" for stdin)
        #[arg(short, long)]
        file: PathBuf,
        /// Execution location name
        #[arg(short, long)]
        location: Option<String>,
    },
}

#[derive(Args, Debug)]
pub struct ScriptArgs {
    /// Monitor the script is attached to
    #[arg(short, long)]
    pub monitor_id: String,
    /// Script file ("-" for stdin)
    #[arg(short, long)]
    pub file: PathBuf,
    /// Execution location name
    #[arg(short, long)]
    pub location: Option<String>,
}
