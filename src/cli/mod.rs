//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, and the
//! subcommand runners.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod presenter;

// Re-export commonly used types
pub use app::{run_list, run_record, run_version, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{Cli, Commands, ConfigAction, RecordArgs};
pub use config_cmd::handle_config_command;
pub use presenter::Presenter;
