//! Notification port interface

use async_trait::async_trait;
use thiserror::Error;

/// Notification errors
#[derive(Debug, Clone, Error)]
pub enum NotificationError {
    #[error("Failed to show notification: {0}")]
    SendFailed(String),
}

/// How prominently a notification should be rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Normal,
    /// Irreversible or failed outcomes (deletes, failures)
    Destructive,
}

impl Severity {
    /// Get the freedesktop icon name
    pub const fn icon_name(&self) -> &'static str {
        match self {
            Self::Normal => "dialog-information",
            Self::Destructive => "dialog-warning",
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Destructive => "destructive",
        }
    }
}

/// Port for user-visible notifications
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Show a notification.
    ///
    /// # Arguments
    /// * `title` - Short headline, e.g. "Export Complete"
    /// * `message` - The notification body
    /// * `severity` - How prominently to render it
    async fn notify(
        &self,
        title: &str,
        message: &str,
        severity: Severity,
    ) -> Result<(), NotificationError>;
}

/// Blanket implementation for boxed notifier types
#[async_trait]
impl Notifier for Box<dyn Notifier> {
    async fn notify(
        &self,
        title: &str,
        message: &str,
        severity: Severity,
    ) -> Result<(), NotificationError> {
        self.as_ref().notify(title, message, severity).await
    }
}
