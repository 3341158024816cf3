//! Timer-driven exporter that produces placeholder references

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::application::ports::{ExportError, ExportJob, Exporter, ProgressCallback};
use crate::domain::config::{DEFAULT_STEP, DEFAULT_TICK_MS};
use crate::domain::export::DownloadRef;

/// Simulated exporter.
///
/// Raises progress by `step` percent every `tick` and completes on the tick
/// that reaches 100. No audio is read or written.
pub struct SimulatedExporter {
    tick: Duration,
    step: u8,
}

impl SimulatedExporter {
    /// 5% every 200ms, 4 seconds per export
    pub fn new() -> Self {
        Self::with_timing(Duration::from_millis(DEFAULT_TICK_MS), DEFAULT_STEP)
    }

    /// Custom timing. `step` is clamped to 1..=100.
    pub fn with_timing(tick: Duration, step: u8) -> Self {
        Self {
            tick,
            step: step.clamp(1, 100),
        }
    }
}

impl Default for SimulatedExporter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Exporter for SimulatedExporter {
    async fn export(
        &self,
        job: &ExportJob,
        on_progress: ProgressCallback,
        cancel: Arc<AtomicBool>,
    ) -> Result<DownloadRef, ExportError> {
        debug!(
            recording = %job.recording.id,
            normalize = job.normalize_audio,
            auto_levels = job.auto_levels,
            "Simulating export"
        );

        let mut progress: u8 = 0;
        loop {
            tokio::time::sleep(self.tick).await;

            if cancel.load(Ordering::SeqCst) {
                return Err(ExportError::Cancelled);
            }

            progress = progress.saturating_add(self.step).min(100);
            on_progress(progress);

            if progress >= 100 {
                return Ok(DownloadRef::placeholder(
                    &job.recording.title,
                    job.format,
                    job.quality,
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recording::RecordingCatalog;
    use crate::domain::settings::{ExportFormat, Quality};
    use std::sync::Mutex;

    fn job() -> ExportJob {
        let recording = RecordingCatalog::seeded().list()[1].clone();
        ExportJob {
            recording,
            format: ExportFormat::Flac,
            quality: Quality::Kbps256,
            normalize_audio: true,
            auto_levels: true,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn zero_step_is_raised_to_one() {
        let exporter = SimulatedExporter::with_timing(Duration::from_millis(10), 0);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let on_progress: ProgressCallback = Arc::new(move |p| sink.lock().unwrap().push(p));

        let started = tokio::time::Instant::now();
        exporter
            .export(&job(), on_progress, Arc::new(AtomicBool::new(false)))
            .await
            .unwrap();

        assert_eq!(started.elapsed(), Duration::from_millis(1000));
        assert_eq!(seen.lock().unwrap().len(), 100);
    }

    #[tokio::test(start_paused = true)]
    async fn reports_every_step_and_completes() {
        let exporter = SimulatedExporter::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let on_progress: ProgressCallback = Arc::new(move |p| sink.lock().unwrap().push(p));

        let started = tokio::time::Instant::now();
        let reference = exporter
            .export(&job(), on_progress, Arc::new(AtomicBool::new(false)))
            .await
            .unwrap();

        assert_eq!(started.elapsed(), Duration::from_millis(4000));
        assert_eq!(reference.as_str(), "#download-Deep House Session #4-flac-256");

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 20);
        assert_eq!(seen.first(), Some(&5));
        assert_eq!(seen.last(), Some(&100));
        assert!(seen.windows(2).all(|w| w[1] == w[0] + 5));
    }

    #[tokio::test(start_paused = true)]
    async fn uneven_step_clamps_at_100() {
        let exporter = SimulatedExporter::with_timing(Duration::from_millis(100), 30);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let on_progress: ProgressCallback = Arc::new(move |p| sink.lock().unwrap().push(p));

        exporter
            .export(&job(), on_progress, Arc::new(AtomicBool::new(false)))
            .await
            .unwrap();

        assert_eq!(*seen.lock().unwrap(), vec![30, 60, 90, 100]);
    }

    #[tokio::test(start_paused = true)]
    async fn stops_when_cancelled() {
        let exporter = SimulatedExporter::new();
        let cancel = Arc::new(AtomicBool::new(true));
        let on_progress: ProgressCallback = Arc::new(|_| panic!("no progress after cancel"));

        let err = exporter.export(&job(), on_progress, cancel).await.unwrap_err();
        assert_eq!(err, ExportError::Cancelled);
    }
}
