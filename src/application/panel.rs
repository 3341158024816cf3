//! Recording panel use case
//!
//! Owns the catalog, the recording settings, the playback selection and one
//! export session per recording. Export and download jobs run as spawned Tokio
//! tasks, so every method that starts one must be called inside a runtime.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use thiserror::Error;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::domain::export::{DownloadRef, ExportSession, ExportState, InvalidStateTransition};
use crate::domain::playback::{PlaybackEvent, PlaybackSelection};
use crate::domain::recording::{RecordingCatalog, RecordingDescriptor, RecordingId};
use crate::domain::settings::{ExportFormat, Quality, RecordingSettings};

use super::ports::{
    ExportError, ExportJob, Exporter, Notifier, ProgressCallback, Severity, Transfer,
};
use super::tasks::{CancelHook, DownloadTask, ExportTask};

/// Errors from panel operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PanelError {
    #[error("Recording {0} not found")]
    NotFound(RecordingId),

    #[error("Recording {0} is already being exported")]
    ExportInProgress(RecordingId),

    #[error("Recording {0} has no export in progress")]
    NotExporting(RecordingId),

    #[error("Recording {0} has no completed export to download")]
    NoCompletedExport(RecordingId),
}

/// Snapshot of one recording's export session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportStatus {
    pub state: ExportState,
    pub progress: u8,
    pub download_ref: Option<DownloadRef>,
    /// Format and quality of the current or last attempt
    pub target: Option<(ExportFormat, Quality)>,
}

impl ExportStatus {
    fn idle() -> Self {
        Self {
            state: ExportState::Idle,
            progress: 0,
            download_ref: None,
            target: None,
        }
    }

    fn of(session: &ExportSession) -> Self {
        Self {
            state: session.state(),
            progress: session.progress(),
            download_ref: session.download_ref().cloned(),
            target: session.target(),
        }
    }
}

/// Export session plus the cancel flag of its running task
#[derive(Default)]
struct ExportSlot {
    session: ExportSession,
    cancel: Option<Arc<AtomicBool>>,
}

impl ExportSlot {
    /// Return the session to idle and raise the running task's cancel flag
    fn cancel(&mut self) -> Result<(), InvalidStateTransition> {
        self.session.cancel()?;
        if let Some(flag) = self.cancel.take() {
            flag.store(true, Ordering::SeqCst);
        }
        Ok(())
    }
}

#[derive(Default)]
struct PanelState {
    catalog: RecordingCatalog,
    settings: RecordingSettings,
    playback: PlaybackSelection,
    exports: HashMap<RecordingId, ExportSlot>,
}

/// Recording panel use case
pub struct RecordingPanel<E, T, N>
where
    E: Exporter,
    T: Transfer,
    N: Notifier,
{
    exporter: Arc<E>,
    transfer: Arc<T>,
    notifier: Arc<N>,
    state: Arc<Mutex<PanelState>>,
}

impl<E, T, N> RecordingPanel<E, T, N>
where
    E: Exporter + 'static,
    T: Transfer + 'static,
    N: Notifier + 'static,
{
    /// Create a panel over the built-in catalog
    pub fn new(exporter: E, transfer: T, notifier: N) -> Self {
        Self::with_catalog(exporter, transfer, notifier, RecordingCatalog::seeded())
    }

    /// Create a panel over a custom catalog
    pub fn with_catalog(exporter: E, transfer: T, notifier: N, catalog: RecordingCatalog) -> Self {
        Self {
            exporter: Arc::new(exporter),
            transfer: Arc::new(transfer),
            notifier: Arc::new(notifier),
            state: Arc::new(Mutex::new(PanelState {
                catalog,
                ..Default::default()
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, PanelState> {
        lock_state(&self.state)
    }

    /// All recordings in catalog order
    pub fn list_recordings(&self) -> Vec<RecordingDescriptor> {
        self.lock().catalog.list().to_vec()
    }

    pub fn recording(&self, id: RecordingId) -> Option<RecordingDescriptor> {
        self.lock().catalog.get(id).cloned()
    }

    pub fn settings(&self) -> RecordingSettings {
        self.lock().settings
    }

    pub fn update_format(&self, format: ExportFormat) -> RecordingSettings {
        self.update_settings(|s| s.with_format(format))
    }

    pub fn update_quality(&self, quality: Quality) -> RecordingSettings {
        self.update_settings(|s| s.with_quality(quality))
    }

    pub fn toggle_normalize(&self) -> RecordingSettings {
        self.update_settings(RecordingSettings::with_normalize_toggled)
    }

    pub fn toggle_auto_levels(&self) -> RecordingSettings {
        self.update_settings(RecordingSettings::with_auto_levels_toggled)
    }

    fn update_settings(
        &self,
        change: impl FnOnce(RecordingSettings) -> RecordingSettings,
    ) -> RecordingSettings {
        let mut state = self.lock();
        state.settings = change(state.settings);
        debug!(settings = ?state.settings, "Recording settings updated");
        state.settings
    }

    /// Currently playing recording, if any
    pub fn selected_recording(&self) -> Option<RecordingId> {
        self.lock().playback.selected()
    }

    /// Export status of a recording, or None if the recording is unknown
    pub fn export_status(&self, id: RecordingId) -> Option<ExportStatus> {
        let state = self.lock();
        if !state.catalog.contains(id) {
            return None;
        }
        Some(
            state
                .exports
                .get(&id)
                .map(|slot| ExportStatus::of(&slot.session))
                .unwrap_or_else(ExportStatus::idle),
        )
    }

    /// Select `id` for playback, or clear the selection if it is already selected.
    /// Only a new selection is announced.
    pub async fn toggle_playback(&self, id: RecordingId) -> Result<PlaybackEvent, PanelError> {
        let (event, title) = {
            let mut state = self.lock();
            let title = state
                .catalog
                .get(id)
                .map(|r| r.title.clone())
                .ok_or(PanelError::NotFound(id))?;
            (state.playback.toggle(id), title)
        };

        match event {
            PlaybackEvent::Started { replaced, .. } => {
                info!(recording = %id, ?replaced, "Playback started");
                send_notification(
                    self.notifier.as_ref(),
                    "Playback Started",
                    &format!("Now playing \"{}\"", title),
                    Severity::Normal,
                )
                .await;
            }
            PlaybackEvent::Stopped { .. } => {
                info!(recording = %id, "Playback stopped");
            }
        }

        Ok(event)
    }

    /// Remove a recording from the catalog.
    ///
    /// Cancels an in-flight export of it, forgets its export session and
    /// clears the playback selection if it was playing.
    pub async fn delete_recording(
        &self,
        id: RecordingId,
    ) -> Result<RecordingDescriptor, PanelError> {
        let removed = {
            let mut state = self.lock();
            let removed = state.catalog.remove(id).ok_or(PanelError::NotFound(id))?;
            if let Some(slot) = state.exports.remove(&id) {
                if let Some(cancel) = slot.cancel {
                    cancel.store(true, Ordering::SeqCst);
                    info!(recording = %id, "Cancelled export of deleted recording");
                }
            }
            state.playback.clear_if(id);
            removed
        };

        info!(recording = %id, title = %removed.title, "Recording deleted");
        send_notification(
            self.notifier.as_ref(),
            "Recording Deleted",
            &format!("\"{}\" has been removed from your library.", removed.title),
            Severity::Destructive,
        )
        .await;

        Ok(removed)
    }

    /// Start exporting a recording. Format and quality default to the current settings.
    ///
    /// Fails with `ExportInProgress` if the recording is already exporting.
    /// Starting again after completion discards the previous result.
    pub async fn start_export(
        &self,
        id: RecordingId,
        format: Option<ExportFormat>,
        quality: Option<Quality>,
    ) -> Result<ExportTask, PanelError> {
        let cancel = Arc::new(AtomicBool::new(false));

        let (job, attempt) = {
            let mut state = self.lock();
            let recording = state
                .catalog
                .get(id)
                .cloned()
                .ok_or(PanelError::NotFound(id))?;
            let settings = state.settings;
            let format = format.unwrap_or(settings.format);
            let quality = quality.unwrap_or(settings.quality);

            let slot = state.exports.entry(id).or_default();
            let attempt = slot
                .session
                .start(format, quality)
                .map_err(|_| PanelError::ExportInProgress(id))?;
            slot.cancel = Some(Arc::clone(&cancel));

            let job = ExportJob {
                recording,
                format,
                quality,
                normalize_audio: settings.normalize_audio,
                auto_levels: settings.auto_levels,
            };
            (job, attempt)
        };

        info!(
            recording = %id,
            format = %job.format,
            quality = %job.quality,
            attempt,
            "Export started"
        );

        let (progress_tx, progress_rx) = watch::channel(0u8);
        let on_progress: ProgressCallback = {
            let state = Arc::clone(&self.state);
            Arc::new(move |percent| {
                progress_tx.send_replace(percent);
                let mut state = lock_state(&state);
                if let Some(slot) = state.exports.get_mut(&id) {
                    if slot.session.attempt() == attempt {
                        let _ = slot.session.advance(percent);
                    }
                }
            })
        };

        let exporter = Arc::clone(&self.exporter);
        let notifier = Arc::clone(&self.notifier);
        let state = Arc::clone(&self.state);
        let task_cancel = Arc::clone(&cancel);

        let handle = tokio::spawn(async move {
            let result = exporter.export(&job, on_progress, task_cancel).await;

            // Only the attempt that still owns the slot may settle it
            let settled = {
                let mut state = lock_state(&state);
                match state.exports.get_mut(&id) {
                    Some(slot) if slot.session.attempt() == attempt => {
                        slot.cancel = None;
                        match &result {
                            Ok(reference) => slot.session.complete(reference.clone()).is_ok(),
                            Err(_) => slot.session.fail().is_ok(),
                        }
                    }
                    _ => false,
                }
            };

            match &result {
                Ok(reference) if settled => {
                    info!(recording = %id, reference = %reference, "Export complete");
                    send_notification(
                        notifier.as_ref(),
                        "Export Complete",
                        &format!(
                            "Your mix \"{}\" has been exported as a crystal-clear {} file at {}kbps.",
                            job.recording.title,
                            job.format.label(),
                            job.quality.kbps()
                        ),
                        Severity::Normal,
                    )
                    .await;
                }
                Err(ExportError::Cancelled) => {
                    info!(recording = %id, attempt, "Export cancelled");
                }
                Err(e) if settled => {
                    warn!(recording = %id, error = %e, "Export failed");
                    send_notification(
                        notifier.as_ref(),
                        "Export Failed",
                        &format!("\"{}\" could not be exported: {}", job.recording.title, e),
                        Severity::Destructive,
                    )
                    .await;
                }
                _ => {
                    debug!(recording = %id, attempt, "Discarding result of superseded export");
                }
            }

            result
        });

        // Same transition as cancel_export, limited to this attempt
        let cancel_hook: CancelHook = {
            let state = Arc::downgrade(&self.state);
            Box::new(move || {
                if let Some(state) = state.upgrade() {
                    let mut state = lock_state(&state);
                    if let Some(slot) = state.exports.get_mut(&id) {
                        if slot.session.attempt() == attempt && slot.cancel().is_ok() {
                            info!(recording = %id, attempt, "Export cancellation requested");
                        }
                    }
                }
                cancel.store(true, Ordering::SeqCst);
            })
        };

        Ok(ExportTask::new(id, progress_rx, cancel_hook, handle))
    }

    /// Cancel a running export. The session returns to idle immediately.
    pub fn cancel_export(&self, id: RecordingId) -> Result<(), PanelError> {
        let mut state = self.lock();
        if !state.catalog.contains(id) {
            return Err(PanelError::NotFound(id));
        }
        let slot = state
            .exports
            .get_mut(&id)
            .ok_or(PanelError::NotExporting(id))?;
        slot.cancel().map_err(|_| PanelError::NotExporting(id))?;
        info!(recording = %id, "Export cancellation requested");
        Ok(())
    }

    /// Download the completed export of a recording.
    ///
    /// Announces the start immediately and the completion once the transfer finishes.
    pub async fn request_download(&self, id: RecordingId) -> Result<DownloadTask, PanelError> {
        let (title, reference, format, quality) = {
            let state = self.lock();
            let recording = state.catalog.get(id).ok_or(PanelError::NotFound(id))?;
            let session = state
                .exports
                .get(&id)
                .map(|slot| &slot.session)
                .filter(|session| session.is_complete())
                .ok_or(PanelError::NoCompletedExport(id))?;
            let reference = session
                .download_ref()
                .cloned()
                .ok_or(PanelError::NoCompletedExport(id))?;
            let (format, quality) = session
                .target()
                .unwrap_or((state.settings.format, state.settings.quality));
            (recording.title.clone(), reference, format, quality)
        };

        info!(recording = %id, reference = %reference, "Download started");
        send_notification(
            self.notifier.as_ref(),
            "Download Started",
            &format!(
                "Downloading \"{}\" as {} ({}kbps).",
                title,
                format.label(),
                quality.kbps()
            ),
            Severity::Normal,
        )
        .await;

        let transfer = Arc::clone(&self.transfer);
        let notifier = Arc::clone(&self.notifier);

        let handle = tokio::spawn(async move {
            let result = transfer.transfer(&reference).await;
            match &result {
                Ok(()) => {
                    info!(recording = %id, "Download complete");
                    send_notification(
                        notifier.as_ref(),
                        "Download Complete",
                        &format!("\"{}\" has been saved to your device.", title),
                        Severity::Normal,
                    )
                    .await;
                }
                Err(e) => {
                    warn!(recording = %id, error = %e, "Download failed");
                    send_notification(
                        notifier.as_ref(),
                        "Download Failed",
                        &format!("\"{}\" could not be downloaded: {}", title, e),
                        Severity::Destructive,
                    )
                    .await;
                }
            }
            result
        });

        Ok(DownloadTask::new(id, handle))
    }
}

fn lock_state(state: &Mutex<PanelState>) -> MutexGuard<'_, PanelState> {
    // The state is plain data; a panic elsewhere cannot leave it half-updated
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Notification failures are logged, never surfaced to the caller
async fn send_notification<N: Notifier + ?Sized>(
    notifier: &N,
    title: &str,
    message: &str,
    severity: Severity,
) {
    if let Err(e) = notifier.notify(title, message, severity).await {
        warn!(title, severity = severity.as_str(), error = %e, "Failed to deliver notification");
    }
}
