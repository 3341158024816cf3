//! Application layer - Use cases and port interfaces
//!
//! Contains the core business operations and trait definitions
//! for external system interactions.

pub mod panel;
pub mod ports;
pub mod tasks;

// Re-export use cases
pub use panel::{ExportStatus, PanelError, RecordingPanel};
pub use tasks::{DownloadTask, ExportTask};
