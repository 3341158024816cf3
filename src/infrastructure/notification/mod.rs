//! Notification infrastructure module
//!
//! Console output by default; desktop notifications through notify-rust on request.

mod console;
mod notify_rust;

pub use console::ConsoleNotifier;
pub use notify_rust::DesktopNotifier;

use crate::application::ports::Notifier;

/// Create the notifier selected by the `notify` setting
pub fn create_notifier(desktop: bool) -> Box<dyn Notifier> {
    if desktop {
        Box::new(DesktopNotifier::new())
    } else {
        Box::new(ConsoleNotifier::new())
    }
}
