//! Domain error types

use thiserror::Error;

/// Error when parsing a mix length string
#[derive(Debug, Clone, Error)]
#[error("Invalid mix length: \"{input}\". Expected format: HH:MM:SS (e.g., 01:23:45)")]
pub struct MixLengthParseError {
    pub input: String,
}

/// Error when an unknown export format is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid format: \"{input}\". Valid formats are: mp3, wav, flac")]
pub struct InvalidFormatError {
    pub input: String,
}

/// Error when an unsupported quality is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid quality: \"{input}\". Valid qualities (kbps) are: 192, 256, 320")]
pub struct InvalidQualityError {
    pub input: String,
}

/// Error when a recording id cannot be parsed
#[derive(Debug, Clone, Error)]
#[error("Invalid recording id: \"{input}\". Expected a positive integer")]
pub struct RecordingIdParseError {
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
