//! Domain error types

use thiserror::Error;

/// Error when a session field is assigned a value outside its domain.
/// The session is left unchanged when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid channel count {0}: valid values are 1 through 32")]
    Channels(u32),

    #[error("invalid sample rate {0}: valid values are 1-299 (kHz shorthand) or 2000-192000 (Hz)")]
    Rate(u32),
}

/// Error when the `arecord -l` listing does not match the expected
/// structure. This means the tool's output format changed and is not
/// recoverable locally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("malformed device header line: {0:?}")]
    MalformedHeader(String),

    #[error("non-numeric card or device id in header line: {0:?}")]
    NonNumericId(String),
}

/// Error when parsing a sample format code
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized sample format: {input:?}. Expected an arecord format code such as S16_LE, U8 or FLOAT_LE")]
pub struct SampleFormatParseError {
    pub input: String,
}

/// Error when parsing a file type code
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized file type: {input:?}. Valid types are: voc, wav, raw, au")]
pub struct FileTypeParseError {
    pub input: String,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
