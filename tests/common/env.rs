//! Test environment builder for isolated jobprune testing.
//!
//! Provides `TestEnv` - a temp base directory holding a `JOBS_FOLDER`, a
//! separate temp home (so no user config leaks in), and helpers to run the
//! jobprune binary against them.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Default job folder name under the base directory
pub const JOBS_FOLDER: &str = "JOBS_FOLDER";

/// Result of running a jobprune CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Check if command succeeded
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Base directory; commands run from here
    pub base: TempDir,
    /// Temporary directory for HOME and XDG config
    pub home: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    /// Base directory with an empty `JOBS_FOLDER`
    pub fn new() -> Self {
        let env = Self::without_job_folder();
        std::fs::create_dir_all(env.jobs_path()).expect("Failed to create job folder");
        env
    }

    /// Base directory without any job folder
    pub fn without_job_folder() -> Self {
        Self {
            base: TempDir::new().expect("Failed to create base dir"),
            home: TempDir::new().expect("Failed to create home dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_jobprune")),
        }
    }

    pub fn base_path(&self, relative: &str) -> PathBuf {
        self.base.path().join(relative)
    }

    pub fn jobs_path(&self) -> PathBuf {
        self.base_path(JOBS_FOLDER)
    }

    /// Write `<name>.JBI` into the default job folder
    pub fn write_job(&self, name: &str, content: &str) {
        self.write_base_file(&format!("{}/{}.JBI", JOBS_FOLDER, name), content);
    }

    /// Write a file relative to the base directory
    pub fn write_base_file(&self, relative: &str, content: &str) {
        let full_path = self.base_path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Write `.jobprune.toml` into the base directory
    pub fn write_project_config(&self, toml: &str) {
        self.write_base_file(".jobprune.toml", toml);
    }

    pub fn job_exists(&self, name: &str) -> bool {
        self.jobs_path().join(format!("{}.JBI", name)).exists()
    }

    /// Sorted file names in a folder under the base directory
    pub fn files_in(&self, relative: &str) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.base_path(relative))
            .map(|entries| {
                entries
                    .flatten()
                    .map(|e| e.file_name().to_string_lossy().into_owned())
                    .collect()
            })
            .unwrap_or_default();
        names.sort();
        names
    }

    /// Sorted file names in the default job folder
    pub fn job_files(&self) -> Vec<String> {
        self.files_in(JOBS_FOLDER)
    }

    /// Run jobprune from the base directory
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_stdin(args, "")
    }

    /// Run jobprune from the base directory, feeding `stdin`
    pub fn run_with_stdin(&self, args: &[&str], stdin: &str) -> TestResult {
        self.run_with_env(args, stdin, &[])
    }

    pub fn run_with_env(&self, args: &[&str], stdin: &str, env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.base.path())
            .args(args)
            .with_test_home(self.home.path())
            .env("NO_COLOR", "1")
            .env("TERM", "xterm-256color")
            .env_remove("RUST_LOG")
            .env_remove("JOBPRUNE_FOLDER")
            .env_remove("JOBPRUNE_EXTENSION")
            .env_remove("JOBPRUNE_DIRECTIVE")
            .env_remove("JOBPRUNE_UNICODE")
            .env_remove("JOBPRUNE_COLOR")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let mut child = cmd.spawn().expect("Failed to execute jobprune");
        if let Some(mut pipe) = child.stdin.take() {
            // The binary may exit before reading; a broken pipe is fine
            let _ = pipe.write_all(stdin.as_bytes());
        }
        let output = child.wait_with_output().expect("Failed to wait for jobprune");

        output_to_result(output)
    }
}

trait TestHomeExt {
    fn with_test_home(&mut self, home: &Path) -> &mut Self;
}

impl TestHomeExt for Command {
    fn with_test_home(&mut self, home: &Path) -> &mut Self {
        self.env("HOME", home)
            .env("USERPROFILE", home)
            .env("XDG_CONFIG_HOME", home.join(".config"))
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
