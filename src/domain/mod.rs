//! Domain layer - Core wrapper logic
//!
//! Contains value objects, validation, and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod device;
pub mod duration;
pub mod error;
pub mod format;
pub mod session;

// Re-export common types
pub use config::AppConfig;
pub use device::{parse_listing, AudioDevice};
pub use duration::RecordDuration;
pub use error::*;
pub use format::{FileType, SampleFormat};
pub use session::{RecordingSession, SessionOptions, AREC_EXEC};
