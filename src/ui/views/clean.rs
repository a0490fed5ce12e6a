//! Clean command UI views
//!
//! Provides consistent rendering for the cleanup report.

use crate::ui::primitives::tag::{dim, StatusTag};
use jobprune::{CleanAction, CleanResult};

/// Render the cleanup header
pub fn render_clean_header(extension: &str, dry_run: bool) -> String {
    if dry_run {
        format!("\nChecking for unused .{} files (dry run)...\n", extension)
    } else {
        format!("\nCleaning up unused .{} files...\n", extension)
    }
}

/// One line per job file, in folder order
pub fn render_clean_lines(result: &CleanResult, supports_color: bool) -> String {
    let mut out = String::new();
    for outcome in &result.outcomes {
        let line = match &outcome.action {
            CleanAction::Kept => StatusTag::Kept.line(&outcome.file_name, supports_color),
            CleanAction::Deleted => StatusTag::Deleted.line(&outcome.file_name, supports_color),
            CleanAction::WouldDelete => {
                StatusTag::WouldDelete.line(&outcome.file_name, supports_color)
            }
            CleanAction::Failed { reason } => StatusTag::Error.line(
                format!("Could not delete {}: {}", outcome.file_name, reason),
                supports_color,
            ),
        };
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Render the cleanup summary
pub fn render_clean_summary(result: &CleanResult, dry_run: bool, supports_color: bool) -> String {
    if result.total_count() == 0 {
        return format!("{}\n", dim("No job files found.", supports_color));
    }

    let verb = if dry_run { "would be deleted" } else { "deleted" };
    let mut text = format!(
        "{} kept, {} {}",
        result.kept_count(),
        result.deleted_count(),
        verb
    );
    if !result.is_success() {
        text.push_str(&format!(", {} failed", result.failed_count()));
    }
    format!("\n{}\n", dim(&text, supports_color))
}
