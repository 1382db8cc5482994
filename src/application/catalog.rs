//! Device catalog use case

use thiserror::Error;

use crate::domain::device::{parse_listing, AudioDevice};
use crate::domain::error::FormatError;
use crate::domain::session::AREC_EXEC;

use super::ports::{ProcessRunner, RunnerError};

/// Errors from catalog queries
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Launch(#[from] RunnerError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("arecord exited with {code}: {detail}")]
    CommandFailed { code: i32, detail: String },

    #[error("arecord was killed before exiting: {detail}")]
    Killed { detail: String },
}

/// Queries the external recorder for its device listing and version.
///
/// Each call spawns exactly one subprocess and blocks until it exits.
pub struct DeviceCatalog<R: ProcessRunner> {
    runner: R,
}

impl<R: ProcessRunner> DeviceCatalog<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// List all capture devices by parsing `arecord -l` output
    pub async fn list_devices(&self) -> Result<Vec<AudioDevice>, CatalogError> {
        let argv = [AREC_EXEC.to_string(), "-l".to_string()];
        let output = self.runner.capture(&argv).await?;
        check_exit(&output)?;
        Ok(parse_listing(&output.stdout_text())?)
    }

    /// Find the first device whose card name exactly equals `name`.
    /// A miss is `Ok(None)`, never an error.
    pub async fn find_device_by_name(
        &self,
        name: &str,
    ) -> Result<Option<AudioDevice>, CatalogError> {
        let devices = self.list_devices().await?;
        Ok(devices.into_iter().find(|device| device.name() == name))
    }

    /// The external tool's version banner, verbatim
    pub async fn version(&self) -> Result<String, CatalogError> {
        let argv = [AREC_EXEC.to_string(), "--version".to_string()];
        let output = self.runner.capture(&argv).await?;
        check_exit(&output)?;
        Ok(output.stdout_text())
    }
}

fn check_exit(output: &super::ports::ProcessOutput) -> Result<(), CatalogError> {
    match output.exit_code {
        Some(0) => Ok(()),
        Some(code) => Err(CatalogError::CommandFailed {
            code,
            detail: output.stderr_tail(),
        }),
        None => Err(CatalogError::Killed {
            detail: output.stderr_tail(),
        }),
    }
}
