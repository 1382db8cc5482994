//! Tokio-based process runner adapter

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{ProcessOutput, ProcessRunner, RunnerError};

/// Runs external commands through tokio::process, blocking the caller
/// until the child exits.
pub struct TokioProcessRunner;

impl TokioProcessRunner {
    pub fn new() -> Self {
        Self
    }

    async fn run_with_stdout(
        &self,
        argv: &[String],
        stdout: Stdio,
    ) -> Result<ProcessOutput, RunnerError> {
        let (exec, args) = argv.split_first().ok_or(RunnerError::EmptyCommand)?;

        let output = Command::new(exec)
            .args(args)
            .stdin(Stdio::null())
            .stdout(stdout)
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    RunnerError::ExecutableNotFound(exec.clone())
                } else {
                    RunnerError::SpawnFailed {
                        exec: exec.clone(),
                        message: e.to_string(),
                    }
                }
            })?;

        Ok(ProcessOutput {
            exit_code: output.status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}

impl Default for TokioProcessRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProcessRunner for TokioProcessRunner {
    async fn capture(&self, argv: &[String]) -> Result<ProcessOutput, RunnerError> {
        self.run_with_stdout(argv, Stdio::piped()).await
    }

    async fn run(&self, argv: &[String]) -> Result<ProcessOutput, RunnerError> {
        // arecord writes the audio to its output file, not stdout, so the
        // child may share the terminal; stderr stays piped for reporting.
        self.run_with_stdout(argv, Stdio::inherit()).await
    }
}
