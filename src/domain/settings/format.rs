//! Export format and quality value objects

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::error::{InvalidFormatError, InvalidQualityError};

/// All available export formats
pub const ALL_FORMATS: &[ExportFormat] = &[ExportFormat::Mp3, ExportFormat::Wav, ExportFormat::Flac];

/// All available qualities
pub const ALL_QUALITIES: &[Quality] = &[Quality::Kbps192, Quality::Kbps256, Quality::Kbps320];

/// Output container for an exported mix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Mp3,
    Wav,
    Flac,
}

impl ExportFormat {
    /// Lower-case identifier
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
            Self::Wav => "wav",
            Self::Flac => "flac",
        }
    }

    /// Upper-case label used in user-facing messages
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Mp3 => "MP3",
            Self::Wav => "WAV",
            Self::Flac => "FLAC",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = InvalidFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mp3" => Ok(Self::Mp3),
            "wav" => Ok(Self::Wav),
            "flac" => Ok(Self::Flac),
            _ => Err(InvalidFormatError { input: s.to_string() }),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Export bitrate in kbps
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Quality {
    Kbps192,
    Kbps256,
    #[default]
    Kbps320,
}

impl Quality {
    pub const fn kbps(&self) -> u16 {
        match self {
            Self::Kbps192 => 192,
            Self::Kbps256 => 256,
            Self::Kbps320 => 320,
        }
    }
}

impl FromStr for Quality {
    type Err = InvalidQualityError;

    /// Accepts the bare number, optionally suffixed with `kbps`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.trim_end_matches("kbps") {
            "192" => Ok(Self::Kbps192),
            "256" => Ok(Self::Kbps256),
            "320" => Ok(Self::Kbps320),
            _ => Err(InvalidQualityError { input: s.to_string() }),
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kbps())
    }
}

impl Serialize for Quality {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.kbps())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_formats() {
        assert_eq!("mp3".parse::<ExportFormat>().unwrap(), ExportFormat::Mp3);
        assert_eq!("WAV".parse::<ExportFormat>().unwrap(), ExportFormat::Wav);
        assert_eq!(" flac ".parse::<ExportFormat>().unwrap(), ExportFormat::Flac);
    }

    #[test]
    fn parse_invalid_format() {
        let err = "ogg".parse::<ExportFormat>().unwrap_err();
        assert_eq!(err.input, "ogg");
        assert!(err.to_string().contains("mp3, wav, flac"));
    }

    #[test]
    fn format_labels() {
        assert_eq!(ExportFormat::Flac.as_str(), "flac");
        assert_eq!(ExportFormat::Flac.label(), "FLAC");
        assert_eq!(ExportFormat::Mp3.to_string(), "mp3");
    }

    #[test]
    fn all_formats_round_trip_through_str() {
        for format in ALL_FORMATS {
            assert_eq!(format.as_str().parse::<ExportFormat>().unwrap(), *format);
        }
    }

    #[test]
    fn parse_qualities() {
        assert_eq!("192".parse::<Quality>().unwrap(), Quality::Kbps192);
        assert_eq!("256kbps".parse::<Quality>().unwrap(), Quality::Kbps256);
        assert_eq!(" 320 ".parse::<Quality>().unwrap(), Quality::Kbps320);
    }

    #[test]
    fn parse_invalid_quality() {
        assert!("128".parse::<Quality>().is_err());
        assert!("".parse::<Quality>().is_err());
        assert!("kbps".parse::<Quality>().is_err());
    }

    #[test]
    fn quality_display_is_bare_number() {
        assert_eq!(Quality::Kbps256.to_string(), "256");
        assert_eq!(ALL_QUALITIES.len(), 3);
    }

    #[test]
    fn defaults() {
        assert_eq!(ExportFormat::default(), ExportFormat::Mp3);
        assert_eq!(Quality::default(), Quality::Kbps320);
    }
}
