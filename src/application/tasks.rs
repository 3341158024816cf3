//! Handles for background export and download jobs

use std::fmt;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::domain::export::DownloadRef;
use crate::domain::recording::RecordingId;

use super::ports::{ExportError, TransferError};

/// Cancels one export attempt: settles its session and stops the exporter
pub(crate) type CancelHook = Box<dyn Fn() + Send + Sync>;

/// A running export attempt.
///
/// Dropping the handle does not stop the export; the panel keeps tracking it.
pub struct ExportTask {
    recording_id: RecordingId,
    progress: watch::Receiver<u8>,
    cancel: CancelHook,
    handle: JoinHandle<Result<DownloadRef, ExportError>>,
}

impl fmt::Debug for ExportTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExportTask")
            .field("recording_id", &self.recording_id)
            .field("progress", &*self.progress.borrow())
            .field("finished", &self.handle.is_finished())
            .finish_non_exhaustive()
    }
}

impl ExportTask {
    pub(crate) fn new(
        recording_id: RecordingId,
        progress: watch::Receiver<u8>,
        cancel: CancelHook,
        handle: JoinHandle<Result<DownloadRef, ExportError>>,
    ) -> Self {
        Self {
            recording_id,
            progress,
            cancel,
            handle,
        }
    }

    pub fn recording_id(&self) -> RecordingId {
        self.recording_id
    }

    /// Last reported progress in percent
    pub fn progress(&self) -> u8 {
        *self.progress.borrow()
    }

    /// Receiver that observes every progress change.
    /// `changed()` errors once the export has finished.
    pub fn subscribe(&self) -> watch::Receiver<u8> {
        self.progress.clone()
    }

    /// Cancel this attempt. Its session returns to idle at once if no newer
    /// attempt replaced it; the exporter stops at its next step.
    pub fn cancel(&self) {
        (self.cancel)();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the export to finish
    pub async fn wait(self) -> Result<DownloadRef, ExportError> {
        match self.handle.await {
            Ok(result) => result,
            Err(e) => Err(ExportError::Aborted(e.to_string())),
        }
    }
}

/// A running download. Resolves after the completion notification was sent.
#[derive(Debug)]
pub struct DownloadTask {
    recording_id: RecordingId,
    handle: JoinHandle<Result<(), TransferError>>,
}

impl DownloadTask {
    pub(crate) fn new(
        recording_id: RecordingId,
        handle: JoinHandle<Result<(), TransferError>>,
    ) -> Self {
        Self {
            recording_id,
            handle,
        }
    }

    pub fn recording_id(&self) -> RecordingId {
        self.recording_id
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    pub async fn wait(self) -> Result<(), TransferError> {
        match self.handle.await {
            Ok(result) => result,
            Err(e) => Err(TransferError::Aborted(e.to_string())),
        }
    }
}
