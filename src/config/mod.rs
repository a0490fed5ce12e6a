//! Configuration module for jobprune
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority, applied by the binary)
//! 2. Environment variables (JOBPRUNE_*)
//! 3. Project config (`<base>/.jobprune.toml`)
//! 4. User config (`~/.config/jobprune/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{ColorMode, Config, JobsConfig, OutputConfig};
