//! Command runners

use std::process::ExitCode;

use tokio::io::BufReader;
use tracing::debug;

use crate::application::ports::{ConfigStore, Notifier};
use crate::application::RecordingPanel;
use crate::domain::config::AppConfig;
use crate::domain::recording::RecordingId;
use crate::domain::settings::{ExportFormat, Quality};
use crate::infrastructure::{create_notifier, SimulatedExporter, SimulatedTransfer, XdgConfigStore};

use super::presenter::Presenter;
use super::shell::run_shell;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Panel wired to the simulated adapters
pub type CliPanel = RecordingPanel<SimulatedExporter, SimulatedTransfer, Box<dyn Notifier>>;

/// Options for the export command
#[derive(Debug, Clone, Copy)]
pub struct ExportOptions {
    pub id: RecordingId,
    pub format: Option<ExportFormat>,
    pub quality: Option<Quality>,
    pub normalize_audio: bool,
    pub auto_levels: bool,
    pub download: bool,
}

/// Build a fresh panel from the merged configuration
pub fn build_panel(config: &AppConfig) -> CliPanel {
    let exporter = SimulatedExporter::with_timing(config.tick_or_default(), config.step_or_default());
    let transfer = SimulatedTransfer::with_delay(config.download_delay_or_default());
    let notifier = create_notifier(config.notify_or_default());
    RecordingPanel::new(exporter, transfer, notifier)
}

/// Print the catalog
pub fn run_list(config: &AppConfig, json: bool) -> ExitCode {
    let presenter = Presenter::new();
    let panel = build_panel(config);
    let recordings = panel.list_recordings();

    if json {
        match serde_json::to_string_pretty(&recordings) {
            Ok(text) => presenter.output(&text),
            Err(e) => {
                presenter.error(&format!("Failed to serialize recordings: {}", e));
                return ExitCode::from(EXIT_ERROR);
            }
        }
    } else {
        presenter.recordings(&recordings, panel.selected_recording());
    }

    ExitCode::from(EXIT_SUCCESS)
}

/// Export one recording with a progress bar, optionally downloading it afterwards.
/// Ctrl-C cancels the export.
pub async fn run_export(config: &AppConfig, options: ExportOptions) -> ExitCode {
    let mut presenter = Presenter::new();
    let panel = build_panel(config);

    let Some(recording) = panel.recording(options.id) else {
        presenter.error(&format!("Recording {} not found", options.id));
        return ExitCode::from(EXIT_ERROR);
    };

    if panel.settings().normalize_audio != options.normalize_audio {
        panel.toggle_normalize();
    }
    if panel.settings().auto_levels != options.auto_levels {
        panel.toggle_auto_levels();
    }

    let task = match panel.start_export(options.id, options.format, options.quality).await {
        Ok(task) => task,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    presenter.start_progress(&format!("Exporting \"{}\"", recording.title));
    let mut progress = task.subscribe();
    let interrupt = tokio::signal::ctrl_c();
    tokio::pin!(interrupt);

    loop {
        tokio::select! {
            changed = progress.changed() => {
                if changed.is_err() {
                    break;
                }
                let percent = *progress.borrow_and_update();
                presenter.update_progress(percent);
            }
            _ = &mut interrupt => {
                debug!("Interrupt received, cancelling export");
                let _ = panel.cancel_export(options.id);
                break;
            }
        }
    }

    let reference = match task.wait().await {
        Ok(reference) => {
            presenter.progress_success("Export complete");
            reference
        }
        Err(e) => {
            presenter.progress_fail(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    presenter.output(reference.as_str());

    if options.download {
        let download = match panel.request_download(options.id).await {
            Ok(download) => download,
            Err(e) => {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
        };
        if let Err(e) = download.wait().await {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    }

    ExitCode::from(EXIT_SUCCESS)
}

/// Toggle playback of one recording
pub async fn run_play(config: &AppConfig, id: RecordingId) -> ExitCode {
    let presenter = Presenter::new();
    let panel = build_panel(config);

    match panel.toggle_playback(id).await {
        Ok(_) => {
            presenter.recordings(&panel.list_recordings(), panel.selected_recording());
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Delete one recording and show what remains
pub async fn run_delete(config: &AppConfig, id: RecordingId) -> ExitCode {
    let presenter = Presenter::new();
    let panel = build_panel(config);

    match panel.delete_recording(id).await {
        Ok(_) => {
            presenter.recordings(&panel.list_recordings(), panel.selected_recording());
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Run the interactive shell on stdin
pub async fn run_shell_session(config: &AppConfig) -> ExitCode {
    let presenter = Presenter::new();
    let panel = build_panel(config);
    let stdin = BufReader::new(tokio::io::stdin());

    match run_shell(&panel, &presenter, stdin).await {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            presenter.error(&format!("Failed to read input: {}", e));
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Load and merge configuration: defaults < file < CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = match store.load().await {
        Ok(config) => config,
        Err(e) => {
            Presenter::new().warn(&format!("Ignoring config file: {}", e));
            AppConfig::empty()
        }
    };

    AppConfig::defaults().merge(file_config).merge(cli_config)
}
