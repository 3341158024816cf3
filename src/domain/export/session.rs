//! Export session state machine

use std::fmt;
use thiserror::Error;

use crate::domain::settings::{ExportFormat, Quality};

use super::DownloadRef;

/// Export states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExportState {
    #[default]
    Idle,
    Exporting,
    Complete,
}

impl ExportState {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Exporting => "exporting",
            Self::Complete => "complete",
        }
    }
}

impl fmt::Display for ExportState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error when an invalid state transition is attempted
#[derive(Debug, Clone, Error)]
#[error("Invalid state transition: cannot {action} while in {current_state} state")]
pub struct InvalidStateTransition {
    pub current_state: ExportState,
    pub action: String,
}

/// Export session entity for a single recording.
///
/// State machine:
///   IDLE -> EXPORTING (start)
///   COMPLETE -> EXPORTING (start, discards the previous result)
///   EXPORTING -> COMPLETE (complete)
///   EXPORTING -> IDLE (cancel, fail)
///
/// `download_ref` is only ever set in COMPLETE.
#[derive(Debug, Default)]
pub struct ExportSession {
    state: ExportState,
    progress: u8,
    download_ref: Option<DownloadRef>,
    target: Option<(ExportFormat, Quality)>,
    attempt: u64,
}

impl ExportSession {
    /// Create a new session in idle state
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ExportState {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state == ExportState::Complete
    }

    /// Progress in percent, 0..=100
    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn download_ref(&self) -> Option<&DownloadRef> {
        self.download_ref.as_ref()
    }

    /// Format and quality of the current or last attempt
    pub fn target(&self) -> Option<(ExportFormat, Quality)> {
        self.target
    }

    /// Attempt counter, bumped on every start
    pub fn attempt(&self) -> u64 {
        self.attempt
    }

    /// Transition to EXPORTING. Returns the new attempt number.
    pub fn start(
        &mut self,
        format: ExportFormat,
        quality: Quality,
    ) -> Result<u64, InvalidStateTransition> {
        if self.state == ExportState::Exporting {
            return Err(self.invalid("start export"));
        }
        self.state = ExportState::Exporting;
        self.progress = 0;
        self.download_ref = None;
        self.target = Some((format, quality));
        self.attempt += 1;
        Ok(self.attempt)
    }

    /// Record progress while exporting. Clamped at 100 and never moves backwards.
    pub fn advance(&mut self, progress: u8) -> Result<(), InvalidStateTransition> {
        if self.state != ExportState::Exporting {
            return Err(self.invalid("advance export"));
        }
        self.progress = self.progress.max(progress.min(100));
        Ok(())
    }

    /// Transition from EXPORTING to COMPLETE
    pub fn complete(&mut self, download_ref: DownloadRef) -> Result<(), InvalidStateTransition> {
        if self.state != ExportState::Exporting {
            return Err(self.invalid("complete export"));
        }
        self.state = ExportState::Complete;
        self.progress = 100;
        self.download_ref = Some(download_ref);
        Ok(())
    }

    /// Transition from EXPORTING to IDLE on user request
    pub fn cancel(&mut self) -> Result<(), InvalidStateTransition> {
        if self.state != ExportState::Exporting {
            return Err(self.invalid("cancel export"));
        }
        self.reset_to_idle();
        Ok(())
    }

    /// Transition from EXPORTING to IDLE after the exporter reported an error
    pub fn fail(&mut self) -> Result<(), InvalidStateTransition> {
        if self.state != ExportState::Exporting {
            return Err(self.invalid("fail export"));
        }
        self.reset_to_idle();
        Ok(())
    }

    fn reset_to_idle(&mut self) {
        self.state = ExportState::Idle;
        self.progress = 0;
        self.download_ref = None;
    }

    fn invalid(&self, action: &str) -> InvalidStateTransition {
        InvalidStateTransition {
            current_state: self.state,
            action: action.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> DownloadRef {
        DownloadRef::placeholder("EDM Club Mix", ExportFormat::Wav, Quality::Kbps192)
    }

    #[test]
    fn new_session_is_idle() {
        let session = ExportSession::new();
        assert_eq!(session.state(), ExportState::Idle);
        assert_eq!(session.progress(), 0);
        assert!(session.download_ref().is_none());
        assert!(session.target().is_none());
    }

    #[test]
    fn start_from_idle() {
        let mut session = ExportSession::new();
        let attempt = session.start(ExportFormat::Wav, Quality::Kbps192).unwrap();
        assert_eq!(attempt, 1);
        assert_eq!(session.state(), ExportState::Exporting);
        assert_eq!(session.target(), Some((ExportFormat::Wav, Quality::Kbps192)));
    }

    #[test]
    fn start_while_exporting_fails() {
        let mut session = ExportSession::new();
        session.start(ExportFormat::Mp3, Quality::Kbps320).unwrap();

        let err = session.start(ExportFormat::Mp3, Quality::Kbps320).unwrap_err();
        assert_eq!(err.current_state, ExportState::Exporting);
        assert!(err.action.contains("start export"));
        assert_eq!(session.attempt(), 1);
    }

    #[test]
    fn advance_clamps_and_is_monotonic() {
        let mut session = ExportSession::new();
        session.start(ExportFormat::Mp3, Quality::Kbps320).unwrap();

        session.advance(35).unwrap();
        assert_eq!(session.progress(), 35);
        session.advance(20).unwrap();
        assert_eq!(session.progress(), 35);
        session.advance(250).unwrap();
        assert_eq!(session.progress(), 100);
        assert_eq!(session.state(), ExportState::Exporting);
    }

    #[test]
    fn advance_from_idle_fails() {
        let mut session = ExportSession::new();
        let err = session.advance(5).unwrap_err();
        assert_eq!(err.current_state, ExportState::Idle);
    }

    #[test]
    fn complete_sets_download_ref() {
        let mut session = ExportSession::new();
        session.start(ExportFormat::Wav, Quality::Kbps192).unwrap();
        session.complete(reference()).unwrap();

        assert!(session.is_complete());
        assert_eq!(session.progress(), 100);
        assert_eq!(session.download_ref(), Some(&reference()));
    }

    #[test]
    fn complete_from_idle_fails() {
        let mut session = ExportSession::new();
        let err = session.complete(reference()).unwrap_err();
        assert_eq!(err.current_state, ExportState::Idle);
        assert!(session.download_ref().is_none());
    }

    #[test]
    fn restart_after_complete_discards_result() {
        let mut session = ExportSession::new();
        session.start(ExportFormat::Wav, Quality::Kbps192).unwrap();
        session.complete(reference()).unwrap();

        let attempt = session.start(ExportFormat::Flac, Quality::Kbps256).unwrap();
        assert_eq!(attempt, 2);
        assert_eq!(session.state(), ExportState::Exporting);
        assert_eq!(session.progress(), 0);
        assert!(session.download_ref().is_none());
    }

    #[test]
    fn cancel_returns_to_idle() {
        let mut session = ExportSession::new();
        session.start(ExportFormat::Mp3, Quality::Kbps320).unwrap();
        session.advance(40).unwrap();

        session.cancel().unwrap();
        assert_eq!(session.state(), ExportState::Idle);
        assert_eq!(session.progress(), 0);
    }

    #[test]
    fn cancel_from_complete_fails() {
        let mut session = ExportSession::new();
        session.start(ExportFormat::Mp3, Quality::Kbps320).unwrap();
        session.complete(reference()).unwrap();

        let err = session.cancel().unwrap_err();
        assert_eq!(err.current_state, ExportState::Complete);
        assert!(session.download_ref().is_some());
    }

    #[test]
    fn fail_returns_to_idle() {
        let mut session = ExportSession::new();
        session.start(ExportFormat::Mp3, Quality::Kbps320).unwrap();
        session.fail().unwrap();
        assert_eq!(session.state(), ExportState::Idle);
        assert!(session.fail().is_err());
    }

    #[test]
    fn state_display() {
        assert_eq!(ExportState::Idle.to_string(), "idle");
        assert_eq!(ExportState::Exporting.to_string(), "exporting");
        assert_eq!(ExportState::Complete.to_string(), "complete");
    }

    #[test]
    fn error_display() {
        let err = InvalidStateTransition {
            current_state: ExportState::Exporting,
            action: "start export".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("start export"));
        assert!(msg.contains("exporting"));
    }
}
