//! Tree command handler
//!
//! Prints the call tree of the starting job without touching the folder.

use anyhow::Result;

use jobprune::domain::ports::FileSystem;
use jobprune::{JobAnalysis, LocalFs, PruneUseCase};

use crate::commands::setup::{job_name_or_prompt, GlobalArgs, Session};
use crate::ui::views::tree::{render_diagnostics, render_job_tree, render_start, render_tree_stats};

/// Execute the tree command
pub fn cmd_tree(args: &GlobalArgs, job: Option<String>) -> Result<()> {
    let session = Session::open(args);
    let input = job_name_or_prompt(job)?;
    analyze_and_report(&session, LocalFs::new(), &input)?;
    Ok(())
}

/// Validate the root job, build its tree and print it.
///
/// Fails before printing anything else when the root job is unusable.
pub fn analyze_and_report<FS: FileSystem>(
    session: &Session,
    fs: FS,
    input: &str,
) -> Result<JobAnalysis> {
    let use_case = PruneUseCase::new(fs, session.folder.clone());
    let root = use_case.resolve_root(input)?;

    print!("{}", render_start(&root));

    let analysis = use_case.analyze(root);
    eprint!(
        "{}",
        render_diagnostics(&analysis.diagnostics, session.ui.color)
    );
    print!(
        "{}",
        render_job_tree(&analysis, &session.ui.glyphs(), session.ui.color)
    );
    if session.ui.verbose > 0 {
        print!("{}", render_tree_stats(&analysis, session.ui.color));
    }

    Ok(analysis)
}
