//! CLI presenter for output formatting

use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

use crate::application::ExportStatus;
use crate::domain::export::ExportState;
use crate::domain::recording::{RecordingDescriptor, RecordingId, EMPTY_CATALOG_MESSAGE};
use crate::domain::settings::RecordingSettings;

/// Presenter for CLI output formatting
pub struct Presenter {
    progress: Option<ProgressBar>,
}

impl Presenter {
    pub fn new() -> Self {
        Self { progress: None }
    }

    /// Start an export progress bar (0-100)
    pub fn start_progress(&mut self, message: &str) {
        let bar = ProgressBar::new(100);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.cyan} {msg} [{bar:20.cyan/blue}] {pos:>3}%")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█░ ");
        bar.set_style(style);
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));
        self.progress = Some(bar);
    }

    pub fn update_progress(&self, percent: u8) {
        if let Some(ref bar) = self.progress {
            bar.set_position(u64::from(percent));
        }
    }

    /// Finish the progress bar with a check mark
    pub fn progress_success(&mut self, message: &str) {
        if let Some(bar) = self.progress.take() {
            bar.finish_with_message(format!("{} {}", "✓".green(), message));
        }
    }

    /// Finish the progress bar with a cross
    pub fn progress_fail(&mut self, message: &str) {
        if let Some(bar) = self.progress.take() {
            bar.abandon_with_message(format!("{} {}", "✗".red(), message));
        }
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }

    /// Print the recording list, marking the playing entry
    pub fn recordings(&self, recordings: &[RecordingDescriptor], playing: Option<RecordingId>) {
        if recordings.is_empty() {
            self.output(EMPTY_CATALOG_MESSAGE);
            return;
        }
        for recording in recordings {
            self.output(&Self::format_recording(recording, playing == Some(recording.id)));
        }
    }

    /// One catalog row: `[id] title  duration  size  date`
    pub fn format_recording(recording: &RecordingDescriptor, playing: bool) -> String {
        let marker = if playing {
            "▶".green().to_string()
        } else {
            " ".to_string()
        };
        format!(
            "{} [{}] {:<24} {}  {:>9}  {}",
            marker,
            recording.id,
            recording.title,
            recording.duration,
            recording.size,
            recording.date.dimmed()
        )
    }

    /// Print an export status line
    pub fn export_status(&self, recording: &RecordingDescriptor, status: &ExportStatus) {
        self.output(&Self::format_export_status(recording, status));
    }

    pub fn format_export_status(recording: &RecordingDescriptor, status: &ExportStatus) -> String {
        let target = status
            .target
            .map(|(format, quality)| format!(" {} {}kbps", format.label(), quality.kbps()))
            .unwrap_or_default();
        match status.state {
            ExportState::Idle => format!("[{}] {}: idle", recording.id, recording.title),
            ExportState::Exporting => format!(
                "[{}] {}: exporting{} {}",
                recording.id,
                recording.title,
                target,
                Self::format_progress(status.progress)
            ),
            ExportState::Complete => format!(
                "[{}] {}: ready{} -> {}",
                recording.id,
                recording.title,
                target,
                status
                    .download_ref
                    .as_ref()
                    .map(|r| r.as_str())
                    .unwrap_or_default()
            ),
        }
    }

    /// Format a 20-cell progress bar with percentage
    pub fn format_progress(percent: u8) -> String {
        let percent = percent.min(100);
        let bar_width = 20usize;
        let filled = usize::from(percent) * bar_width / 100;
        let empty = bar_width - filled;

        format!(
            "[{}{}] {:>3}%",
            "█".repeat(filled).cyan(),
            "░".repeat(empty),
            percent
        )
    }

    /// Print the current recording settings
    pub fn settings(&self, settings: &RecordingSettings) {
        self.key_value("format", settings.format.as_str());
        self.key_value("quality", &format!("{}kbps", settings.quality.kbps()));
        self.key_value("normalize_audio", &settings.normalize_audio.to_string());
        self.key_value("auto_levels", &settings.auto_levels.to_string());
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}
