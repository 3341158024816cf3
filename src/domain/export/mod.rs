//! Export domain module

mod download_ref;
mod session;

pub use download_ref::DownloadRef;
pub use session::{ExportSession, ExportState, InvalidStateTransition};
