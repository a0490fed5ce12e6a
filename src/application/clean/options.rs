//! Clean options

/// Options for the cleanup pass
#[derive(Debug, Clone, Default)]
pub struct CleanOptions {
    /// Whether this is a dry run (no actual deletion)
    pub dry_run: bool,
}

impl CleanOptions {
    /// Create new clean options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set dry run
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
