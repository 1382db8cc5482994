//! AlsaRec - convenience wrapper around the ALSA `arecord` recorder
//!
//! This crate enumerates capture devices by parsing `arecord -l` output and
//! builds/executes `arecord` invocations from typed recording parameters.
//! All actual recording and file writing is delegated to the external
//! process; nothing here touches the audio device directly.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Value objects (devices, formats, sessions), validation, and errors
//! - **Application**: Use cases and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (tokio subprocess, TOML config)
//! - **CLI**: Command-line interface, argument parsing, and output formatting

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
