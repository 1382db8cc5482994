//! CLI argument definitions using Clap

use clap::{Args, Parser, Subcommand};

/// AlsaRec - convenience wrapper around the ALSA arecord recorder
#[derive(Parser, Debug)]
#[command(name = "alsa-rec")]
#[command(version)]
#[command(about = "Record audio through the ALSA arecord command-line tool")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List available capture devices
    List,
    /// Print the arecord version banner
    Version,
    /// Record audio from a capture device
    Record(RecordArgs),
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Options for the record subcommand. Unset options fall back to the
/// config file, then to the documented defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct RecordArgs {
    /// Card name of the capture device, as printed by `list` (default: first device)
    #[arg(short = 'D', long, value_name = "NAME")]
    pub device: Option<String>,

    /// Output base name; the file-type extension is appended
    #[arg(short = 'o', long, value_name = "NAME")]
    pub output: Option<String>,

    /// Container format: voc, wav, raw or au
    #[arg(short = 't', long, value_name = "TYPE")]
    pub file_type: Option<String>,

    /// Number of channels (1-32)
    #[arg(short = 'c', long, value_name = "N")]
    pub channels: Option<u32>,

    /// Sample format code, e.g. S16_LE
    #[arg(short = 'f', long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Sampling rate in Hz (2000-192000), or kHz shorthand below 300
    #[arg(short = 'r', long, value_name = "RATE")]
    pub rate: Option<u32>,

    /// Stop after this many seconds (default: record until interrupted)
    #[arg(short = 'd', long, value_name = "SECS")]
    pub duration: Option<u64>,

    /// Open the audio device in non-blocking mode
    #[arg(short = 'N', long)]
    pub non_block: bool,

    /// Write one file per channel
    #[arg(short = 'I', long)]
    pub separate_channels: bool,

    /// Expand strftime %-codes in the output name
    #[arg(long)]
    pub use_strftime: bool,

    /// Rotate the output file after this many seconds
    #[arg(long, value_name = "SECS")]
    pub max_file_time: Option<u32>,
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "device",
    "filename",
    "file_type",
    "channels",
    "format",
    "rate",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
