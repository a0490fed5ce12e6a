//! Test fixtures - job file builders.

/// A job body calling `calls` in order, padded with ordinary robot lines
pub fn job_calling(calls: &[&str]) -> String {
    let mut body = String::from("/JOB\n//NAME TEST\nNOP\n");
    for call in calls {
        body.push_str(&format!("CALL JOB:{}\n", call));
        body.push_str("MOVJ C00000 VJ=50.00\n");
    }
    body.push_str("END\n");
    body
}

/// A job body without any calls
pub fn leaf_job() -> String {
    job_calling(&[])
}
