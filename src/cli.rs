//! CLI Argument Parsing
//!
//! Running `xcadd` with no subcommand registers files; the flags shared by
//! `xcadd` and `xcadd plan` live in `RunArgs`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use xcadd::BridgeKind;

/// xcadd - open files in Xcode so they appear in the project navigator
#[derive(Parser, Debug)]
#[command(name = "xcadd")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
#[command(
    after_help = "Without FILES, the list comes from xcadd.toml, the user config, or the built-in defaults."
)]
pub struct Cli {
    /// Output NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v shows each command)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print warnings, errors and the closing message
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Config file to use instead of ./xcadd.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub run: RunArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Flags that pick the project, files and bridge
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Project directory the files are relative to
    #[arg(short = 'C', long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Application to open files in (osascript only; xed uses the selected Xcode)
    #[arg(long, value_name = "NAME")]
    pub app: Option<String>,

    /// Scripting bridge (osascript, xed)
    #[arg(long, value_name = "KIND")]
    pub bridge: Option<BridgeKind>,

    /// Exit with status 1 if any file was missing or any command failed
    #[arg(long)]
    pub strict: bool,

    /// Show what would be opened without running anything
    #[arg(long)]
    pub dry_run: bool,

    /// Files to open (relative to the project directory); replaces the configured list
    #[arg(value_name = "FILES")]
    pub files: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show which files would be opened and which are missing
    Plan {
        #[command(flatten)]
        run: RunArgs,
    },

    /// Print the effective configuration
    Config,
}
