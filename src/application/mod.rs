//! Application layer - Use cases and port interfaces
//!
//! Contains the wrapper's operations and trait definitions
//! for external system interactions.

pub mod catalog;
pub mod ports;
pub mod recorder;

// Re-export use cases
pub use catalog::{CatalogError, DeviceCatalog};
pub use recorder::{RecordError, Recorder};
