//! The run sequence: validate arguments, build the request, dispatch once

use crate::cli::{self, Cli};
use crate::errors::{NotifyError, Result};
use crate::notify::{Notification, Notifier, DEFAULT_TITLE};
use std::io::Write;

/// Turn parsed arguments into a notification request
///
/// Only the presence of the message is checked; an empty string is a message.
pub fn build_request(cli: &Cli) -> Result<Notification> {
    let message = cli.message().ok_or(NotifyError::MissingMessage)?;
    let title = cli.title().unwrap_or(DEFAULT_TITLE);

    if !cli.extra().is_empty() {
        tracing::debug!(ignored = ?cli.extra(), "Ignoring arguments after the title");
    }

    Ok(Notification::new(title, message))
}

/// Send exactly one notification for the given arguments
pub fn run(cli: &Cli, notifier: &impl Notifier) -> Result<()> {
    let notification = build_request(cli)?;

    notifier.show(&notification).inspect_err(|e| {
        tracing::error!(error = %e, title = %notification.title, "Notification was not shown");
    })?;

    tracing::info!(title = %notification.title, "Notification sent");
    Ok(())
}

/// Map the outcome of [`run`] to the process exit code
///
/// A missing message writes the usage line to `out` and exits 1. Notification
/// failures are handed back for color-eyre to report.
pub fn finish(
    result: Result<()>,
    program: &str,
    out: &mut impl Write,
) -> color_eyre::Result<u8> {
    match result {
        Ok(()) => Ok(0),
        Err(NotifyError::MissingMessage) => {
            writeln!(out, "{}", cli::usage(program))?;
            Ok(1)
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::testing::RecordingNotifier;
    use clap::Parser;
    use std::time::Duration;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("notify").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_missing_message_sends_nothing() {
        let notifier = RecordingNotifier::default();
        let result = run(&cli(&[]), &notifier);
        assert_eq!(result, Err(NotifyError::MissingMessage));
        assert!(notifier.calls.borrow().is_empty());
    }

    #[test]
    fn test_message_only_uses_default_title() {
        let notifier = RecordingNotifier::default();
        run(&cli(&["Build finished"]), &notifier).unwrap();

        let calls = notifier.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].message, "Build finished");
        assert_eq!(calls[0].title, "通知");
        assert_eq!(calls[0].timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_message_and_title() {
        let notifier = RecordingNotifier::default();
        run(&cli(&["Build finished", "CI"]), &notifier).unwrap();

        let calls = notifier.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].message, "Build finished");
        assert_eq!(calls[0].title, "CI");
        assert_eq!(calls[0].timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_extra_arguments_ignored() {
        let notifier = RecordingNotifier::default();
        run(&cli(&["Build finished", "CI", "-x", "fourth"]), &notifier).unwrap();

        let calls = notifier.calls.borrow();
        assert_eq!(
            *calls,
            vec![Notification {
                title: "CI".to_string(),
                message: "Build finished".to_string(),
                timeout: Duration::from_secs(5),
            }]
        );
    }

    #[test]
    fn test_empty_message_is_present() {
        let notifier = RecordingNotifier::default();
        run(&cli(&[""]), &notifier).unwrap();
        assert_eq!(notifier.calls.borrow()[0].message, "");
    }

    #[test]
    fn test_timeout_fixed_for_any_input() {
        for args in [
            &["a"][..],
            &["a", "b"][..],
            &["long message with spaces", "t", "x"][..],
        ] {
            let request = build_request(&cli(args)).unwrap();
            assert_eq!(request.timeout, Duration::from_secs(5), "args: {args:?}");
        }
    }

    #[test]
    fn test_backend_failure_propagates_without_retry() {
        let notifier = RecordingNotifier::failing("no display server");
        let result = run(&cli(&["Build finished"]), &notifier);
        assert_eq!(
            result,
            Err(NotifyError::Display("no display server".to_string()))
        );
        assert_eq!(notifier.calls.borrow().len(), 1);
    }

    #[test]
    fn test_hyphen_leading_message_is_sent() {
        let notifier = RecordingNotifier::default();
        run(&cli(&["-5°C", "Weather"]), &notifier).unwrap();

        let calls = notifier.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].message, "-5°C");
        assert_eq!(calls[0].title, "Weather");
    }

    #[test]
    fn test_finish_missing_message_prints_usage_and_exits_1() {
        let notifier = RecordingNotifier::default();
        let mut out = Vec::new();

        let code = finish(run(&cli(&[]), &notifier), "notify", &mut out).unwrap();

        assert_eq!(code, 1);
        let stdout = String::from_utf8(out).unwrap();
        assert_eq!(stdout, "使い方: notify <通知メッセージ> [タイトル]\n");
        assert!(notifier.calls.borrow().is_empty());
    }

    #[test]
    fn test_finish_success_exits_0_silently() {
        let notifier = RecordingNotifier::default();
        let mut out = Vec::new();

        let code = finish(run(&cli(&["Build finished"]), &notifier), "notify", &mut out).unwrap();

        assert_eq!(code, 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_finish_reports_notification_failure() {
        let notifier = RecordingNotifier::failing("no display server");
        let mut out = Vec::new();

        let report = finish(run(&cli(&["Build finished"]), &notifier), "notify", &mut out)
            .unwrap_err();

        assert_eq!(
            report.downcast_ref::<NotifyError>(),
            Some(&NotifyError::Display("no display server".to_string()))
        );
        assert!(out.is_empty());
    }
}
