//! Shared command setup
//!
//! Resolves configuration, the job folder and the UI context, and asks for
//! the starting job when it was not given on the command line.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use is_terminal::IsTerminal;

use jobprune::{Config, JobFolder};

use crate::ui::context::{ColorWhen, UiContext};
use crate::ui::output::print_config_warnings;

const JOB_PROMPT: &str = "Please enter the starting JOB name";

/// Global command-line settings shared by every command
#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub base: PathBuf,
    pub folder: Option<PathBuf>,
    pub ext: Option<String>,
    pub ascii: bool,
    pub color: Option<ColorWhen>,
    pub verbose: u8,
}

/// Everything a command needs after configuration is resolved
#[derive(Debug, Clone)]
pub struct Session {
    pub folder: JobFolder,
    pub ui: UiContext,
}

impl Session {
    pub fn open(args: &GlobalArgs) -> Self {
        let (config, warnings) = Config::load_or_default_with_warnings(Some(&args.base));
        let ui = UiContext::new(args.verbose, args.color, args.ascii, &config);
        print_config_warnings(&warnings, ui.color);

        Self {
            folder: resolve_folder(args, &config),
            ui,
        }
    }
}

/// CLI flags win over config; relative folders hang off the base directory.
fn resolve_folder(args: &GlobalArgs, config: &Config) -> JobFolder {
    let path = match &args.folder {
        Some(folder) => join_base(&args.base, folder),
        None => config.job_folder(&args.base),
    };
    let extension = args
        .ext
        .as_deref()
        .filter(|ext| !ext.trim().trim_start_matches('.').is_empty())
        .unwrap_or(&config.jobs.extension);

    let folder = JobFolder::new(path)
        .with_extension(extension)
        .with_directive(config.jobs.directive.clone());
    tracing::debug!(
        folder = %folder.path().display(),
        extension = folder.extension(),
        directive = folder.directive(),
        "resolved job folder"
    );
    folder
}

fn join_base(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// The starting job from the command line, or from a prompt.
pub fn job_name_or_prompt(job: Option<String>) -> Result<String> {
    match job {
        Some(job) => Ok(job),
        None => prompt_job_name(),
    }
}

fn prompt_job_name() -> Result<String> {
    if !std::io::stdin().is_terminal() {
        // Piped input: read one line without terminal handling
        eprint!("{}: ", JOB_PROMPT);
        std::io::stderr().flush()?;
        let mut line = String::new();
        std::io::stdin().lock().read_line(&mut line)?;
        return Ok(line);
    }

    let input: String = dialoguer::Input::new()
        .with_prompt(JOB_PROMPT)
        .allow_empty(true)
        .interact_text()?;
    Ok(input)
}
