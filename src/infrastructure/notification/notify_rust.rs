//! Desktop notification adapter using notify-rust

use async_trait::async_trait;
use notify_rust::{Notification, Timeout};

use crate::application::ports::{NotificationError, Notifier, Severity};

const APP_NAME: &str = "Mixdeck";

/// Destructive notifications stay on screen longer
const DESTRUCTIVE_TIMEOUT_MS: u32 = 8000;

/// Desktop notifier backed by the platform notification service
#[derive(Debug, Default)]
pub struct DesktopNotifier;

impl DesktopNotifier {
    pub fn new() -> Self {
        Self
    }

    fn build(title: &str, message: &str, severity: Severity) -> Notification {
        let mut notification = Notification::new();
        notification
            .appname(APP_NAME)
            .summary(title)
            .body(message)
            .icon(severity.icon_name());
        if severity == Severity::Destructive {
            notification.timeout(Timeout::Milliseconds(DESTRUCTIVE_TIMEOUT_MS));
        }
        notification
    }
}

#[async_trait]
impl Notifier for DesktopNotifier {
    async fn notify(
        &self,
        title: &str,
        message: &str,
        severity: Severity,
    ) -> Result<(), NotificationError> {
        let notification = Self::build(title, message, severity);

        // Talking to the notification daemon blocks
        tokio::task::spawn_blocking(move || {
            notification
                .show()
                .map(drop)
                .map_err(|e| NotificationError::SendFailed(e.to_string()))
        })
        .await
        .map_err(|e| NotificationError::SendFailed(format!("Task join error: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_notification_fields() {
        let n = DesktopNotifier::build("Export Complete", "done", Severity::Normal);
        assert_eq!(n.appname, "Mixdeck");
        assert_eq!(n.summary, "Export Complete");
        assert_eq!(n.body, "done");
        assert_eq!(n.icon, "dialog-information");
    }

    #[test]
    fn destructive_notification_uses_warning_icon() {
        let n = DesktopNotifier::build("Recording Deleted", "gone", Severity::Destructive);
        assert_eq!(n.icon, "dialog-warning");
        assert_eq!(n.summary, "Recording Deleted");
    }
}
