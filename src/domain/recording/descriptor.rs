//! Recording descriptor entity

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::error::RecordingIdParseError;

use super::MixLength;

/// Identifier of a recording in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RecordingId(u32);

impl RecordingId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl From<u32> for RecordingId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl FromStr for RecordingId {
    type Err = RecordingIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(Self)
            .map_err(|_| RecordingIdParseError { input: s.to_string() })
    }
}

impl fmt::Display for RecordingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A previously captured mix. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordingDescriptor {
    pub id: RecordingId,
    pub title: String,
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
    pub duration: MixLength,
    /// Human-readable size, e.g. `54.8 MB`
    pub size: String,
}

impl RecordingDescriptor {
    pub fn new(
        id: impl Into<RecordingId>,
        title: impl Into<String>,
        date: impl Into<String>,
        duration: MixLength,
        size: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            date: date.into(),
            duration,
            size: size.into(),
        }
    }
}
