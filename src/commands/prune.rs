//! Prune command handler
//!
//! Prints the call tree, then deletes every job file the tree does not
//! reference.

use anyhow::Result;

use jobprune::{CleanOptions, CleanUseCase, LocalFs};

use crate::commands::setup::{job_name_or_prompt, GlobalArgs, Session};
use crate::commands::tree::analyze_and_report;
use crate::ui::views::clean::{render_clean_header, render_clean_lines, render_clean_summary};

/// Execute the prune command
pub fn cmd_prune(args: &GlobalArgs, job: Option<String>, dry_run: bool) -> Result<()> {
    let session = Session::open(args);
    let input = job_name_or_prompt(job)?;

    let fs = LocalFs::new();
    let analysis = analyze_and_report(&session, fs, &input)?;

    let options = CleanOptions::new().with_dry_run(dry_run);
    let result = CleanUseCase::new(fs).execute(&session.folder, &analysis.reachable, &options)?;

    let color = session.ui.color;
    print!(
        "{}",
        render_clean_header(session.folder.extension(), dry_run)
    );
    print!("{}", render_clean_lines(&result, color));
    print!("{}", render_clean_summary(&result, dry_run, color));

    Ok(())
}
