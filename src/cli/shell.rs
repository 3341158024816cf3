//! Interactive shell over a single panel

use std::collections::HashMap;
use std::str::FromStr;

use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::application::ports::{Exporter, Notifier, Transfer};
use crate::application::{DownloadTask, ExportTask, RecordingPanel};
use crate::domain::playback::PlaybackEvent;
use crate::domain::recording::RecordingId;
use crate::domain::settings::{ExportFormat, Quality};

use super::presenter::Presenter;

pub const SHELL_HELP: &str = "\
Commands:
  list                          List recordings
  status [ID]                   Show export status
  play ID                       Toggle playback
  delete ID                     Delete a recording
  export ID [FORMAT] [QUALITY]  Start an export in the background
  cancel ID                     Cancel a running export
  wait ID                       Wait for an export to finish
  download ID                   Download a completed export
  settings                      Show recording settings
  set format|quality VALUE      Change a recording setting
  toggle normalize|auto-levels  Flip an enhancement flag
  help                          Show this help
  quit                          Leave the shell";

/// Error when a shell line cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellParseError {
    #[error("Unknown command: \"{0}\". Type 'help' for a list of commands")]
    UnknownCommand(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("{0}")]
    InvalidValue(String),
}

/// One parsed shell line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCommand {
    Help,
    List,
    Status(Option<RecordingId>),
    Play(RecordingId),
    Delete(RecordingId),
    Export {
        id: RecordingId,
        format: Option<ExportFormat>,
        quality: Option<Quality>,
    },
    Cancel(RecordingId),
    Wait(RecordingId),
    Download(RecordingId),
    Settings,
    SetFormat(ExportFormat),
    SetQuality(Quality),
    ToggleNormalize,
    ToggleAutoLevels,
    Quit,
}

fn parse_value<T>(value: &str) -> Result<T, ShellParseError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .parse()
        .map_err(|e: T::Err| ShellParseError::InvalidValue(e.to_string()))
}

impl FromStr for ShellCommand {
    type Err = ShellParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((command, args)) = words.split_first() else {
            return Err(ShellParseError::Usage("help"));
        };

        let id_arg = |usage: &'static str| -> Result<RecordingId, ShellParseError> {
            match args {
                [id] => parse_value(id),
                _ => Err(ShellParseError::Usage(usage)),
            }
        };

        match command.to_lowercase().as_str() {
            "help" | "?" => Ok(Self::Help),
            "list" | "ls" => Ok(Self::List),
            "status" => match args {
                [] => Ok(Self::Status(None)),
                [id] => Ok(Self::Status(Some(parse_value(id)?))),
                _ => Err(ShellParseError::Usage("status [ID]")),
            },
            "play" => id_arg("play ID").map(Self::Play),
            "delete" | "rm" => id_arg("delete ID").map(Self::Delete),
            "cancel" => id_arg("cancel ID").map(Self::Cancel),
            "wait" => id_arg("wait ID").map(Self::Wait),
            "download" => id_arg("download ID").map(Self::Download),
            "export" => match args {
                [id, rest @ ..] if rest.len() <= 2 => Ok(Self::Export {
                    id: parse_value(id)?,
                    format: rest.first().map(|f| parse_value(f)).transpose()?,
                    quality: rest.get(1).map(|q| parse_value(q)).transpose()?,
                }),
                _ => Err(ShellParseError::Usage("export ID [FORMAT] [QUALITY]")),
            },
            "settings" => Ok(Self::Settings),
            "set" => match args {
                ["format", value] => Ok(Self::SetFormat(parse_value(value)?)),
                ["quality", value] => Ok(Self::SetQuality(parse_value(value)?)),
                _ => Err(ShellParseError::Usage("set format|quality VALUE")),
            },
            "toggle" => match args {
                ["normalize"] => Ok(Self::ToggleNormalize),
                ["auto-levels"] | ["auto_levels"] => Ok(Self::ToggleAutoLevels),
                _ => Err(ShellParseError::Usage("toggle normalize|auto-levels")),
            },
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(ShellParseError::UnknownCommand(other.to_string())),
        }
    }
}

/// Background jobs started from the shell
#[derive(Default)]
struct Jobs {
    exports: HashMap<RecordingId, ExportTask>,
    downloads: Vec<DownloadTask>,
}

/// Run the shell until `quit` or end of input, then wait for background jobs.
pub async fn run_shell<R, E, T, N>(
    panel: &RecordingPanel<E, T, N>,
    presenter: &Presenter,
    input: R,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    E: Exporter + 'static,
    T: Transfer + 'static,
    N: Notifier + 'static,
{
    let mut jobs = Jobs::default();
    let mut lines = input.lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<ShellCommand>() {
            Ok(ShellCommand::Quit) => break,
            Ok(command) => execute(panel, presenter, &mut jobs, command).await,
            Err(e) => presenter.error(&e.to_string()),
        }
    }

    for (id, task) in jobs.exports.drain() {
        if let Err(e) = task.wait().await {
            tracing::debug!(recording = %id, error = %e, "Background export ended without result");
        }
    }
    for task in jobs.downloads.drain(..) {
        let id = task.recording_id();
        match task.wait().await {
            Ok(()) => tracing::debug!(recording = %id, "Background download finished"),
            Err(e) => tracing::debug!(recording = %id, error = %e, "Background download failed"),
        }
    }

    Ok(())
}

async fn execute<E, T, N>(
    panel: &RecordingPanel<E, T, N>,
    presenter: &Presenter,
    jobs: &mut Jobs,
    command: ShellCommand,
) where
    E: Exporter + 'static,
    T: Transfer + 'static,
    N: Notifier + 'static,
{
    match command {
        ShellCommand::Help => presenter.output(SHELL_HELP),
        ShellCommand::List => {
            presenter.recordings(&panel.list_recordings(), panel.selected_recording())
        }
        ShellCommand::Status(Some(id)) => match (panel.recording(id), panel.export_status(id)) {
            (Some(recording), Some(status)) => presenter.export_status(&recording, &status),
            _ => presenter.error(&format!("Recording {} not found", id)),
        },
        ShellCommand::Status(None) => {
            for recording in panel.list_recordings() {
                if let Some(status) = panel.export_status(recording.id) {
                    presenter.export_status(&recording, &status);
                }
            }
        }
        ShellCommand::Play(id) => match panel.toggle_playback(id).await {
            Ok(PlaybackEvent::Stopped { .. }) => presenter.info(&format!("Stopped {}", id)),
            Ok(PlaybackEvent::Started { .. }) => {}
            Err(e) => presenter.error(&e.to_string()),
        },
        ShellCommand::Delete(id) => match panel.delete_recording(id).await {
            Ok(_) => {
                jobs.exports.remove(&id);
            }
            Err(e) => presenter.error(&e.to_string()),
        },
        ShellCommand::Export {
            id,
            format,
            quality,
        } => match panel.start_export(id, format, quality).await {
            Ok(task) => {
                presenter.info(&format!("Exporting {} in the background", id));
                jobs.exports.insert(id, task);
            }
            Err(e) => presenter.error(&e.to_string()),
        },
        ShellCommand::Cancel(id) => match panel.cancel_export(id) {
            Ok(()) => presenter.info(&format!("Cancelled export of {}", id)),
            Err(e) => presenter.error(&e.to_string()),
        },
        ShellCommand::Wait(id) => match jobs.exports.remove(&id) {
            Some(task) => match task.wait().await {
                Ok(reference) => presenter.success(&format!("Ready: {}", reference)),
                Err(e) => presenter.warn(&e.to_string()),
            },
            None => presenter.warn(&format!("No export of {} started in this session", id)),
        },
        ShellCommand::Download(id) => match panel.request_download(id).await {
            Ok(task) => jobs.downloads.push(task),
            Err(e) => presenter.error(&e.to_string()),
        },
        ShellCommand::Settings => presenter.settings(&panel.settings()),
        ShellCommand::SetFormat(format) => presenter.settings(&panel.update_format(format)),
        ShellCommand::SetQuality(quality) => presenter.settings(&panel.update_quality(quality)),
        ShellCommand::ToggleNormalize => presenter.settings(&panel.toggle_normalize()),
        ShellCommand::ToggleAutoLevels => presenter.settings(&panel.toggle_auto_levels()),
        ShellCommand::Quit => {}
    }
}
