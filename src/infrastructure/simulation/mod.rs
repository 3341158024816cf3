//! Simulated export and download adapters

mod exporter;
mod transfer;

pub use exporter::SimulatedExporter;
pub use transfer::SimulatedTransfer;
