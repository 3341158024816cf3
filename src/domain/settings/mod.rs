//! Export settings module

mod format;
mod recording_settings;

pub use format::{ExportFormat, Quality, ALL_FORMATS, ALL_QUALITIES};
pub use recording_settings::RecordingSettings;
