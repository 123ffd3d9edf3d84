//! xcadd CLI - open files in Xcode so they appear in the project navigator
//!
//! Usage: xcadd [OPTIONS] [FILES]... [COMMAND]
//!
//! Commands:
//!   plan    Show which files would be opened and which are missing
//!   config  Print the effective configuration

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let global = commands::GlobalArgs::from_cli(&cli);

    match cli.command {
        None if cli.run.dry_run => commands::plan::cmd_plan(&global, &cli.run),
        None => commands::register::cmd_register(&global, &cli.run),
        Some(Commands::Plan { run }) => commands::plan::cmd_plan(&global, &run),
        Some(Commands::Config) => commands::config::cmd_config(&global, &cli.run),
    }
}
