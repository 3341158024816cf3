//! Domain layer - Core business logic
//!
//! Contains value objects, entities, and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod export;
pub mod playback;
pub mod recording;
pub mod settings;

// Re-export common types
pub use config::AppConfig;
pub use error::*;
pub use export::{DownloadRef, ExportSession, ExportState, InvalidStateTransition};
pub use playback::{PlaybackEvent, PlaybackSelection};
pub use recording::{MixLength, RecordingCatalog, RecordingDescriptor, RecordingId};
pub use settings::{ExportFormat, Quality, RecordingSettings};
