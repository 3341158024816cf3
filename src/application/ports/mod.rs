//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod config;
pub mod exporter;
pub mod notifier;
pub mod transfer;

// Re-export common types
pub use config::ConfigStore;
pub use exporter::{ExportError, ExportJob, Exporter, ProgressCallback};
pub use notifier::{NotificationError, Notifier, Severity};
pub use transfer::{Transfer, TransferError};
