//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces:
//! config storage, notifications and the simulated export pipeline.

pub mod config;
pub mod logging;
pub mod notification;
pub mod simulation;

// Re-export adapters
pub use config::XdgConfigStore;
pub use notification::{create_notifier, ConsoleNotifier, DesktopNotifier};
pub use simulation::{SimulatedExporter, SimulatedTransfer};
