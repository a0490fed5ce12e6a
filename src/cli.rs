use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};

use crate::ui::context::ColorWhen;

/// jobprune - delete robot job files the starting job never calls
#[derive(Parser, Debug)]
#[command(name = "jobprune")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'jobprune' without a job name to be prompted for one.")]
pub struct Cli {
    /// Starting job name (prompted for when omitted)
    pub job: Option<String>,

    /// Base directory the job folder and project config are resolved against
    #[arg(long, global = true, default_value = ".")]
    pub base: PathBuf,

    /// Job folder (default from config, JOBS_FOLDER)
    #[arg(long, global = true)]
    pub folder: Option<PathBuf>,

    /// Job file extension (default from config, JBI)
    #[arg(long, global = true)]
    pub ext: Option<String>,

    /// Show what would be deleted without deleting anything
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Draw the tree with ASCII characters
    #[arg(long, global = true)]
    pub ascii: bool,

    /// Color output
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// The command to run; a bare `jobprune [JOB]` is `prune [JOB]`.
    ///
    /// A job given before a subcommand is refused rather than guessed at.
    pub fn resolve_command(&self) -> Result<Commands> {
        match (&self.job, &self.command) {
            (Some(job), Some(_)) => bail!(
                "Job '{}' was given before a subcommand; pass it after the subcommand.",
                job
            ),
            (job, None) => Ok(Commands::Prune { job: job.clone() }),
            (None, Some(command)) => Ok(command.clone()),
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the call tree and delete unreferenced job files (default)
    Prune {
        /// Starting job name (prompted for when omitted)
        job: Option<String>,
    },

    /// Print the call tree only; nothing is deleted
    Tree {
        /// Starting job name (prompted for when omitted)
        job: Option<String>,
    },
}
