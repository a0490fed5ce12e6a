//! Job tree views

use crate::ui::primitives::tag::{dim, heading, StatusTag};
use jobprune::{render_tree, BuildDiagnostic, JobAnalysis, JobName, TreeGlyphs};

/// `Starting from job: <name>` banner, preceded by a blank line
pub fn render_start(root: &JobName) -> String {
    format!("\nStarting from job: {}\n", root)
}

/// One `[ERROR]` line per file that could not be loaded
pub fn render_diagnostics(diagnostics: &[BuildDiagnostic], supports_color: bool) -> String {
    let mut out = String::new();
    for diagnostic in diagnostics {
        out.push_str(&StatusTag::Error.line(diagnostic, supports_color));
        out.push('\n');
    }
    out
}

/// The call tree under its heading
pub fn render_job_tree(analysis: &JobAnalysis, glyphs: &TreeGlyphs, supports_color: bool) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(&heading("Job Call Tree:", supports_color));
    out.push('\n');
    for line in render_tree(&analysis.tree, glyphs) {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Size of the tree, shown with `-v`
pub fn render_tree_stats(analysis: &JobAnalysis, supports_color: bool) -> String {
    let children = analysis.tree.children();
    let text = format!(
        "{} jobs reachable, {} tree nodes, depth {}, {} missing",
        analysis.reachable.len(),
        children.node_count() + 1,
        children.depth(),
        analysis.diagnostics.len()
    );
    format!("{}\n", dim(&text, supports_color))
}
