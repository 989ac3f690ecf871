//! Test environment builder for isolated primer runs.
//!
//! Every run gets its own working directory and its own HOME, so neither a
//! real `primer.toml` nor a real user config can leak into a test.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Result of running a primer CLI command
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

    /// stdout split into lines
    pub fn stdout_lines(&self) -> Vec<&str> {
        self.stdout.lines().collect()
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Working directory for the command
    pub work_dir: TempDir,
    /// Temporary directory for HOME
    pub home_dir: TempDir,
    primer_bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            work_dir: TempDir::new().expect("Failed to create work dir"),
            home_dir: TempDir::new().expect("Failed to create home dir"),
            primer_bin: PathBuf::from(env!("CARGO_BIN_EXE_primer")),
        }
    }

    /// Get path relative to the working directory
    pub fn work_path(&self, relative: &str) -> PathBuf {
        self.work_dir.path().join(relative)
    }

    /// Write a file into the working directory
    pub fn write_file(&self, relative: &str, content: &str) {
        let full_path = self.work_path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Write a file under HOME
    pub fn write_home_file(&self, relative: &str, content: &str) {
        let full_path = self.home_dir.path().join(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    pub fn read_file(&self, relative: &str) -> String {
        std::fs::read_to_string(self.work_path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    /// Run primer in the working directory
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run primer with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = self.command(args);
        for (key, value) in env_vars {
            cmd.env(key, value);
        }
        let output = cmd.output().expect("Failed to execute primer");
        output_to_result(output)
    }

    /// Run primer with `input` piped to stdin
    pub fn run_with_stdin(&self, args: &[&str], input: impl AsRef<[u8]>) -> TestResult {
        let mut child = self
            .command(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn primer");

        child
            .stdin
            .take()
            .expect("stdin is piped")
            .write_all(input.as_ref())
            .expect("Failed to write stdin");

        let output = child.wait_with_output().expect("Failed to wait for primer");
        output_to_result(output)
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.primer_bin);
        cmd.current_dir(self.work_dir.path())
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .env_remove("PRIMER_MANUFACTURER")
            .env_remove("PRIMER_JOURNAL")
            .env_remove("PRIMER_COLOR");
        cmd
    }

    pub fn home(&self) -> &Path {
        self.home_dir.path()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
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
