//! Record use case

use thiserror::Error;

use crate::domain::duration::RecordDuration;
use crate::domain::session::RecordingSession;

use super::ports::{ProcessRunner, RunnerError};

/// Errors from a recording run
#[derive(Debug, Clone, Error)]
pub enum RecordError {
    #[error(transparent)]
    Launch(#[from] RunnerError),

    #[error("arecord exited with {code}: {detail}")]
    CommandFailed { code: i32, detail: String },

    #[error("arecord was killed before exiting: {detail}")]
    Killed { detail: String },
}

/// Executes a session's assembled command through the runner port.
///
/// Each call spawns one subprocess and blocks until it exits; the output
/// file is created by the external process, never by this crate. No
/// resource is held between calls, so a single `Recorder` can serve many
/// runs of the same session.
pub struct Recorder<R: ProcessRunner> {
    runner: R,
}

impl<R: ProcessRunner> Recorder<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// Record for `duration`, re-reading the session's current fields.
    ///
    /// The duration is stored on the session, so the assembled command is
    /// observable via [`RecordingSession::command`] afterwards.
    pub async fn record(
        &self,
        session: &mut RecordingSession,
        duration: RecordDuration,
    ) -> Result<(), RecordError> {
        session.set_duration(duration);
        let argv = session.command();
        let output = self.runner.run(&argv).await?;

        match output.exit_code {
            Some(0) => Ok(()),
            Some(code) => Err(RecordError::CommandFailed {
                code,
                detail: output.stderr_tail(),
            }),
            None => Err(RecordError::Killed {
                detail: output.stderr_tail(),
            }),
        }
    }
}
