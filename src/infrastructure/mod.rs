//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the operating system (subprocesses, config files).

pub mod config;
pub mod process;

// Re-export adapters
pub use config::XdgConfigStore;
pub use process::TokioProcessRunner;
