use jobprune::JobPruneError;

use crate::ui::primitives::tag::StatusTag;

/// Render a fatal error for stderr.
///
/// Errors that stop the run before cleanup also say so, so the operator
/// knows the job folder was left untouched.
pub fn format_error(err: &anyhow::Error, supports_color: bool) -> String {
    let mut out = StatusTag::Error.line(err, supports_color);
    out.push('\n');

    if let Some(prune_err) = err.downcast_ref::<JobPruneError>() {
        if prune_err.aborts_before_cleanup() {
            out.push_str(&StatusTag::Aborted.line("No files will be deleted.", supports_color));
            out.push('\n');
        }
    }

    out
}

pub fn print_error(err: &anyhow::Error, supports_color: bool) {
    eprint!("{}", format_error(err, supports_color));
}
