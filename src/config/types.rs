//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::loader::{self, ConfigWarning};

/// Job folder configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JobsConfig {
    /// Folder holding the job files, relative to the base directory
    #[serde(default = "default_folder")]
    pub folder: PathBuf,

    /// Job file extension without the leading dot (matched case-sensitively)
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Line prefix that marks a reference to another job
    #[serde(default = "default_directive")]
    pub directive: String,
}

impl Default for JobsConfig {
    fn default() -> Self {
        Self {
            folder: default_folder(),
            extension: default_extension(),
            directive: default_directive(),
        }
    }
}

fn default_folder() -> PathBuf {
    PathBuf::from("JOBS_FOLDER")
}

fn default_extension() -> String {
    "JBI".to_string()
}

fn default_directive() -> String {
    crate::domain::services::DEFAULT_DIRECTIVE.to_string()
}

fn default_true() -> bool {
    true
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub jobs: JobsConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load from project config, user config, or defaults, keeping the
    /// warnings for display
    pub fn load_or_default_with_warnings(base_dir: Option<&Path>) -> (Self, Vec<ConfigWarning>) {
        loader::load_or_default(base_dir)
    }

    /// Resolve the job folder against a base directory
    pub fn job_folder(&self, base_dir: &Path) -> PathBuf {
        if self.jobs.folder.is_absolute() {
            self.jobs.folder.clone()
        } else {
            base_dir.join(&self.jobs.folder)
        }
    }
}
