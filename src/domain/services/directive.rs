//! Reference directive parsing
//!
//! A job references another job with a line of the form
//!
//! ```text
//! CALL JOB:PICK_PART (ARGS)
//! ```
//!
//! After trimming, the line must start with the directive prefix. The first
//! whitespace-delimited token after the prefix names the called job; any
//! further text on the line is ignored.

use crate::domain::value_objects::JobName;

/// Prefix of a job reference line
pub const DEFAULT_DIRECTIVE: &str = "CALL JOB:";

/// Extract the referenced job from one line, if it is a directive line.
///
/// A directive with nothing after the prefix yields the empty job name.
/// Any Unicode whitespace ends the name, so `CALL JOB:A\tB` names `A`.
pub fn parse_directive(line: &str, prefix: &str) -> Option<JobName> {
    let remainder = line.trim().strip_prefix(prefix)?.trim();
    let name = remainder.split_whitespace().next().unwrap_or_default();
    Some(JobName::from(name))
}

/// All referenced jobs in a file's text, in the order they appear
pub fn references<'a>(content: &'a str, prefix: &'a str) -> impl Iterator<Item = JobName> + 'a {
    content
        .lines()
        .filter_map(move |line| parse_directive(line, prefix))
}
