//! Terminal notification adapter

use std::io::{self, Write};

use async_trait::async_trait;
use colored::Colorize;

use crate::application::ports::{NotificationError, Notifier, Severity};

/// Prints notifications to stderr, one line each
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self
    }

    /// Render one notification line
    pub fn format(title: &str, message: &str, severity: Severity) -> String {
        match severity {
            Severity::Normal => format!("{} {} {}", "●".cyan(), title.bold(), message),
            Severity::Destructive => format!("{} {} {}", "●".red(), title.red().bold(), message),
        }
    }
}

#[async_trait]
impl Notifier for ConsoleNotifier {
    async fn notify(
        &self,
        title: &str,
        message: &str,
        severity: Severity,
    ) -> Result<(), NotificationError> {
        let line = Self::format(title, message, severity);
        let mut stderr = io::stderr().lock();
        writeln!(stderr, "{}", line).map_err(|e| NotificationError::SendFailed(e.to_string()))
    }
}
