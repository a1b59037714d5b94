//! Test environment for isolated textfix testing.
//!
//! Provides `TestEnv` - a temp working directory plus helpers to run the
//! `print-lines` and `resolve-conflicts` binaries inside it.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running a CLI command
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

/// Isolated working directory for one test.
pub struct TestEnv {
    pub root: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Get path relative to the working directory
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Write a file, creating parent directories
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let full_path = self.path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Write raw bytes
    pub fn write_bytes(&self, relative: &str, content: &[u8]) -> PathBuf {
        let full_path = self.path(relative);
        std::fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Read a file's content
    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    /// Read a file's raw bytes
    pub fn read_bytes(&self, relative: &str) -> Vec<u8> {
        std::fs::read(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    /// Run `print-lines` from the working directory
    pub fn print_lines(&self, args: &[&str]) -> TestResult {
        self.run_bin(env!("CARGO_BIN_EXE_print-lines"), args)
    }

    /// Run `resolve-conflicts` from the working directory
    pub fn resolve_conflicts(&self, args: &[&str]) -> TestResult {
        self.run_bin(env!("CARGO_BIN_EXE_resolve-conflicts"), args)
    }

    fn run_bin(&self, bin: &str, args: &[&str]) -> TestResult {
        let output = Command::new(bin)
            .current_dir(self.root.path())
            .args(args)
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1")
            .output()
            .unwrap_or_else(|e| panic!("Failed to execute {}: {}", bin, e));

        output_to_result(output)
    }

    pub fn root_path(&self) -> &Path {
        self.root.path()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert Command output to TestResult
fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
