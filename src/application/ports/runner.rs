//! Process runner port interface

use async_trait::async_trait;
use thiserror::Error;

/// Errors from launching or waiting on the external process
#[derive(Debug, Clone, Error)]
pub enum RunnerError {
    #[error("{0} is not installed or not on PATH")]
    ExecutableNotFound(String),

    #[error("failed to start {exec}: {message}")]
    SpawnFailed { exec: String, message: String },

    #[error("failed to wait for {exec}: {message}")]
    WaitFailed { exec: String, message: String },

    #[error("empty command line")]
    EmptyCommand,
}

/// Captured result of one finished subprocess
#[derive(Debug, Clone, Default)]
pub struct ProcessOutput {
    /// Exit code, or None when the process was killed by a signal
    pub exit_code: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Stdout decoded as text
    pub fn stdout_text(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }

    /// The last non-empty stderr line, for error reporting
    pub fn stderr_tail(&self) -> String {
        String::from_utf8_lossy(&self.stderr)
            .lines()
            .rev()
            .find(|line| !line.trim().is_empty())
            .unwrap_or("unknown error")
            .to_string()
    }
}

/// Port for running one external process to completion.
///
/// The first argv element is the executable name. Both methods block the
/// caller until the child exits; there is no background execution and no
/// cancellation beyond external process termination.
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Run with stdout and stderr captured (catalog queries)
    async fn capture(&self, argv: &[String]) -> Result<ProcessOutput, RunnerError>;

    /// Run with stdout inherited and stderr captured for error reporting
    /// (recording); `stdout` in the result is empty
    async fn run(&self, argv: &[String]) -> Result<ProcessOutput, RunnerError>;
}
