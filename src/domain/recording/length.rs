//! Mix length value object

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::domain::error::MixLengthParseError;

/// Length of a recorded mix, displayed as `HH:MM:SS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MixLength {
    seconds: u64,
}

impl MixLength {
    /// Create from hours, minutes and seconds. Saturates at `u64::MAX` seconds.
    pub const fn from_hms(hours: u64, minutes: u64, seconds: u64) -> Self {
        Self {
            seconds: hours
                .saturating_mul(3600)
                .saturating_add(minutes.saturating_mul(60))
                .saturating_add(seconds),
        }
    }

    /// Total length in seconds
    pub const fn as_secs(&self) -> u64 {
        self.seconds
    }
}

impl FromStr for MixLength {
    type Err = MixLengthParseError;

    /// Parse `HH:MM:SS`. Hours may exceed two digits; minutes and seconds must be below 60.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || MixLengthParseError { input: s.to_string() };

        let parts: Vec<&str> = s.trim().split(':').collect();
        let [hours, minutes, seconds] = parts.as_slice() else {
            return Err(err());
        };

        let parse = |part: &str| -> Result<u64, MixLengthParseError> {
            if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
                return Err(err());
            }
            part.parse().map_err(|_| err())
        };

        let hours = parse(*hours)?;
        let minutes = parse(*minutes)?;
        let seconds = parse(*seconds)?;

        if minutes >= 60 || seconds >= 60 {
            return Err(err());
        }

        let total = hours
            .checked_mul(3600)
            .and_then(|h| h.checked_add(minutes * 60 + seconds))
            .ok_or_else(err)?;

        Ok(Self { seconds: total })
    }
}

impl fmt::Display for MixLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.seconds / 3600;
        let minutes = (self.seconds % 3600) / 60;
        let seconds = self.seconds % 60;
        write!(f, "{:02}:{:02}:{:02}", hours, minutes, seconds)
    }
}

impl Serialize for MixLength {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
