//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::format::{FileType, SampleFormat};

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Card name of the capture device to record from
    pub device: Option<String>,
    /// Output base name (no extension)
    pub filename: Option<String>,
    /// Container format code: voc, wav, raw or au
    pub file_type: Option<String>,
    /// Channel count, 1 through 32
    pub channels: Option<u32>,
    /// Sample format code, e.g. S16_LE
    pub format: Option<String>,
    /// Sampling rate in Hz, or kHz shorthand below 300
    pub rate: Option<u32>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            device: None,
            filename: Some("test".to_string()),
            file_type: Some("wav".to_string()),
            channels: Some(1),
            format: Some("S16_LE".to_string()),
            rate: Some(44100),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            device: other.device.or(self.device),
            filename: other.filename.or(self.filename),
            file_type: other.file_type.or(self.file_type),
            channels: other.channels.or(self.channels),
            format: other.format.or(self.format),
            rate: other.rate.or(self.rate),
        }
    }

    /// Get the output base name, or "test" if not set
    pub fn filename_or_default(&self) -> &str {
        self.filename.as_deref().unwrap_or("test")
    }

    /// Get file_type as parsed FileType, or WAV if not set/invalid
    pub fn file_type_or_default(&self) -> FileType {
        self.file_type
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Get the channel count, or 1 if not set
    pub fn channels_or_default(&self) -> u32 {
        self.channels.unwrap_or(1)
    }

    /// Get format as parsed SampleFormat, or S16_LE if not set/invalid
    pub fn format_or_default(&self) -> SampleFormat {
        self.format
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Get the sampling rate, or 44100 if not set
    pub fn rate_or_default(&self) -> u32 {
        self.rate.unwrap_or(44100)
    }
}
