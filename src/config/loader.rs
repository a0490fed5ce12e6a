//! Configuration loading

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{JobPruneError, JobPruneResult};

use super::types::{ColorMode, Config};

/// File name of the per-folder config, looked up in the base directory.
pub const PROJECT_CONFIG_FILE: &str = ".jobprune.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// A key the schema does not know about
    UnknownKey {
        key: String,
        file: PathBuf,
        line: Option<usize>,
        suggestion: Option<String>,
    },
    /// A config file that exists but could not be used
    Skipped { file: PathBuf, message: String },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::UnknownKey {
                key,
                file,
                line,
                suggestion,
            } => {
                write!(f, "unknown config key '{}' in {}", key, file.display())?;
                if let Some(line) = line {
                    write!(f, ":{}", line)?;
                }
                if let Some(suggestion) = suggestion {
                    write!(f, " (did you mean '{}'?)", suggestion)?;
                }
                Ok(())
            }
            ConfigWarning::Skipped { file, message } => {
                write!(f, "ignoring config {}: {}", file.display(), message)
            }
        }
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> JobPruneResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| JobPruneError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;
    validate(&config).map_err(|message| JobPruneError::InvalidConfig {
        file: path.to_path_buf(),
        message,
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning::UnknownKey {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults, then apply env overrides.
///
/// The first config file found wins. A file that fails to parse is reported
/// as a warning and the next candidate is tried.
pub fn load_or_default(base_dir: Option<&Path>) -> (Config, Vec<ConfigWarning>) {
    let mut warnings = Vec::new();

    let candidates = base_dir
        .map(|base| base.join(PROJECT_CONFIG_FILE))
        .into_iter()
        .chain(dirs::config_dir().map(|dir| dir.join("jobprune/config.toml")));

    for path in candidates {
        if !path.is_file() {
            continue;
        }
        match load_with_warnings(&path) {
            Ok((config, mut file_warnings)) => {
                tracing::debug!(path = %path.display(), "loaded config");
                warnings.append(&mut file_warnings);
                return (
                    with_env_overrides(config, |key| std::env::var(key).ok()),
                    warnings,
                );
            }
            Err(err) => warnings.push(ConfigWarning::Skipped {
                file: path.clone(),
                message: err.to_string(),
            }),
        }
    }

    (
        with_env_overrides(Config::default(), |key| std::env::var(key).ok()),
        warnings,
    )
}

/// Apply environment variable overrides (JOBPRUNE_* prefix)
pub fn with_env_overrides(mut config: Config, get_env: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(folder) = get_env("JOBPRUNE_FOLDER").filter(|v| !v.trim().is_empty()) {
        config.jobs.folder = PathBuf::from(folder);
    }

    if let Some(ext) = get_env("JOBPRUNE_EXTENSION") {
        let ext = ext.trim().trim_start_matches('.');
        if !ext.is_empty() {
            config.jobs.extension = ext.to_string();
        }
    }

    if let Some(directive) = get_env("JOBPRUNE_DIRECTIVE").filter(|v| !v.trim().is_empty()) {
        config.jobs.directive = directive.trim().to_string();
    }

    if let Some(val) = get_env("JOBPRUNE_UNICODE") {
        config.output.unicode = val.to_lowercase() != "false" && val != "0";
    }

    if let Some(color) = get_env("JOBPRUNE_COLOR") {
        config.output.color = match color.to_lowercase().as_str() {
            "always" => ColorMode::Always,
            "never" => ColorMode::Never,
            _ => ColorMode::Auto,
        };
    }

    config
}

/// Reject values that would make every line a directive or every file a job.
fn validate(config: &Config) -> Result<(), String> {
    if config.jobs.directive.trim().is_empty() {
        return Err("jobs.directive must not be empty".to_string());
    }
    if config.jobs.extension.trim().trim_start_matches('.').is_empty() {
        return Err("jobs.extension must not be empty".to_string());
    }
    Ok(())
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "jobs",
        "folder",
        "extension",
        "directive",
        "output",
        "color",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
