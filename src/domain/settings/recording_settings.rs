//! Recording settings value object

use serde::Serialize;

use super::{ExportFormat, Quality};

/// Settings applied to exports when no explicit format/quality is given.
/// Held in memory only; every new panel starts from the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecordingSettings {
    pub format: ExportFormat,
    pub quality: Quality,
    pub normalize_audio: bool,
    pub auto_levels: bool,
}

impl Default for RecordingSettings {
    fn default() -> Self {
        Self {
            format: ExportFormat::Mp3,
            quality: Quality::Kbps320,
            normalize_audio: true,
            auto_levels: true,
        }
    }
}

impl RecordingSettings {
    pub fn with_format(self, format: ExportFormat) -> Self {
        Self { format, ..self }
    }

    pub fn with_quality(self, quality: Quality) -> Self {
        Self { quality, ..self }
    }

    pub fn with_normalize_toggled(self) -> Self {
        Self {
            normalize_audio: !self.normalize_audio,
            ..self
        }
    }

    pub fn with_auto_levels_toggled(self) -> Self {
        Self {
            auto_levels: !self.auto_levels,
            ..self
        }
    }
}
