//! Recording domain module

mod catalog;
mod descriptor;
mod length;

pub use catalog::{RecordingCatalog, EMPTY_CATALOG_MESSAGE};
pub use descriptor::{RecordingDescriptor, RecordingId};
pub use length::MixLength;
