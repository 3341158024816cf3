//! Download reference value object

use std::fmt;

use serde::Serialize;

use crate::domain::settings::{ExportFormat, Quality};

/// Opaque marker standing in for an exported file handle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DownloadRef(String);

impl DownloadRef {
    /// Placeholder reference of the form `#download-{title}-{format}-{quality}`
    pub fn placeholder(title: &str, format: ExportFormat, quality: Quality) -> Self {
        Self(format!("#download-{}-{}-{}", title, format.as_str(), quality.kbps()))
    }

    /// Wrap an existing reference produced by an exporter
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DownloadRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_encodes_title_format_quality() {
        let r = DownloadRef::placeholder("Deep House Session #4", ExportFormat::Flac, Quality::Kbps256);
        assert_eq!(r.as_str(), "#download-Deep House Session #4-flac-256");
        assert_eq!(r.to_string(), r.as_str());
    }
}
