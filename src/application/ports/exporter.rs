//! Export port interface

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::export::DownloadRef;
use crate::domain::recording::RecordingDescriptor;
use crate::domain::settings::{ExportFormat, Quality};

/// Export errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    #[error("Export was cancelled")]
    Cancelled,

    #[error("Export failed: {0}")]
    Failed(String),

    #[error("Export task aborted: {0}")]
    Aborted(String),
}

/// Progress callback type for reporting export progress.
/// Parameter: percent complete, 0..=100
pub type ProgressCallback = Arc<dyn Fn(u8) + Send + Sync>;

/// Everything an exporter needs to produce one output
#[derive(Debug, Clone)]
pub struct ExportJob {
    pub recording: RecordingDescriptor,
    pub format: ExportFormat,
    pub quality: Quality,
    pub normalize_audio: bool,
    pub auto_levels: bool,
}

/// Port for converting a recording into a downloadable output
#[async_trait]
pub trait Exporter: Send + Sync {
    /// Run one export to completion.
    ///
    /// # Arguments
    /// * `job` - What to export and how
    /// * `on_progress` - Called with the new percentage whenever it changes
    /// * `cancel` - Checked between steps; when set the export stops with `Cancelled`
    ///
    /// # Returns
    /// A reference to the produced output
    async fn export(
        &self,
        job: &ExportJob,
        on_progress: ProgressCallback,
        cancel: Arc<AtomicBool>,
    ) -> Result<DownloadRef, ExportError>;
}
