//! CLI argument definitions using Clap

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::recording::RecordingId;
use crate::domain::settings::{ExportFormat, Quality};

/// Mixdeck - manage, export and download your recorded mixes
#[derive(Parser, Debug)]
#[command(name = "mixdeck")]
#[command(version)]
#[command(about = "Manage, export and download recorded DJ mixes")]
#[command(long_about = None)]
pub struct Cli {
    /// Show desktop notifications instead of printing them
    #[arg(short = 'n', long)]
    pub notify: bool,

    /// Simulated export tick in milliseconds
    #[arg(long, value_name = "MS")]
    pub tick_ms: Option<u64>,

    /// Simulated download delay in milliseconds
    #[arg(long, value_name = "MS")]
    pub download_delay_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List recordings (default)
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Export a recording
    Export {
        /// Recording id
        id: RecordingId,
        /// Output format
        #[arg(short = 'f', long, value_name = "FORMAT")]
        format: Option<FormatArg>,
        /// Output quality in kbps
        #[arg(short = 'q', long, value_name = "KBPS")]
        quality: Option<QualityArg>,
        /// Skip loudness normalization
        #[arg(long)]
        no_normalize: bool,
        /// Skip automatic level adjustment
        #[arg(long)]
        no_auto_levels: bool,
        /// Download the result once the export completes
        #[arg(short = 'd', long)]
        download: bool,
    },
    /// Start playback of a recording
    Play {
        /// Recording id
        id: RecordingId,
    },
    /// Delete a recording
    Delete {
        /// Recording id
        id: RecordingId,
    },
    /// Interactive session reading commands from stdin
    Shell,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
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

/// Format argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Mp3,
    Wav,
    Flac,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Mp3 => ExportFormat::Mp3,
            FormatArg::Wav => ExportFormat::Wav,
            FormatArg::Flac => ExportFormat::Flac,
        }
    }
}

/// Quality argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum QualityArg {
    #[value(name = "192")]
    Kbps192,
    #[value(name = "256")]
    Kbps256,
    #[value(name = "320")]
    Kbps320,
}

impl From<QualityArg> for Quality {
    fn from(arg: QualityArg) -> Self {
        match arg {
            QualityArg::Kbps192 => Quality::Kbps192,
            QualityArg::Kbps256 => Quality::Kbps256,
            QualityArg::Kbps320 => Quality::Kbps320,
        }
    }
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "notify",
    "log_level",
    "simulation.tick_ms",
    "simulation.step",
    "simulation.download_delay_ms",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
