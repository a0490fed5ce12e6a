//! jobprune CLI - call-graph based cleanup for robot job folders
//!
//! Usage: jobprune [OPTIONS] [JOB] [COMMAND]
//!
//! Commands:
//!   prune   Print the call tree and delete unreferenced job files (default)
//!   tree    Print the call tree only

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod logging;
mod ui;

use cli::{Cli, Commands};
use commands::setup::GlobalArgs;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let caps = ui::terminal::detect_capabilities();
            ui::error::print_error(&err, caps.supports_color && !caps.is_ci);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let args = GlobalArgs {
        base: cli.base.clone(),
        folder: cli.folder.clone(),
        ext: cli.ext.clone(),
        ascii: cli.ascii,
        color: cli.color,
        verbose: cli.verbose,
    };

    match cli.resolve_command()? {
        Commands::Prune { job } => commands::prune::cmd_prune(&args, job, cli.dry_run),
        Commands::Tree { job } => commands::tree::cmd_tree(&args, job),
    }
}
