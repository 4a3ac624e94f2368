//! Cross-platform native desktop notifications
//!
//! Uses notify-rust for native notifications on macOS, Linux, BSD and Windows.
//! The [`Notifier`] trait is the seam between the CLI and the platform, so the
//! run sequence can be exercised without a notification server.

use crate::cli::Context;
use crate::errors::Result;
use std::time::Duration;

/// How long every notification stays on screen
pub const DISPLAY_TIMEOUT: Duration = Duration::from_secs(5);

/// Title used when none is given on the command line
pub const DEFAULT_TITLE: &str = "通知";

/// A single notification request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub timeout: Duration,
}

impl Notification {
    /// Build a request with the fixed display timeout
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            timeout: DISPLAY_TIMEOUT,
        }
    }
}

/// Something that can put a notification on screen
pub trait Notifier {
    fn show(&self, notification: &Notification) -> Result<()>;
}

/// Notifier backed by the platform notification service
///
/// On macOS, uses native NSUserNotification or UNUserNotification APIs.
/// On Linux and BSD, talks to the freedesktop.org notification server over D-Bus.
#[derive(Debug, Clone)]
pub struct DesktopNotifier {
    context: Context,
}

impl DesktopNotifier {
    pub fn new(context: Context) -> Self {
        Self { context }
    }

    /// Translate a request into a notify-rust notification
    fn build(&self, notification: &Notification) -> notify_rust::Notification {
        let timeout_ms = u32::try_from(notification.timeout.as_millis()).unwrap_or(u32::MAX);

        let mut builder = notify_rust::Notification::new();
        builder
            .appname(&self.context.app_name)
            .summary(&notification.title)
            .body(&notification.message)
            .timeout(notify_rust::Timeout::Milliseconds(timeout_ms));

        if let Some(icon) = &self.context.icon {
            builder.icon(icon);
        }

        builder.finalize()
    }
}

impl Notifier for DesktopNotifier {
    /// Runs on the calling thread so failures reach the caller
    fn show(&self, notification: &Notification) -> Result<()> {
        tracing::debug!(
            app_name = %self.context.app_name,
            title = %notification.title,
            "Showing desktop notification"
        );

        self.build(notification).show()?;
        Ok(())
    }
}
