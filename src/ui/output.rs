//! Console presentation for both stages
//!
//! Everything here is advisory text for humans; automation should rely on
//! the exit code only.

use crate::config::RecipientConfig;
use crate::core::constants::display;
use crate::core::error::{LoadMailError, SendError};
use crate::notify::SendReport;
use crate::reporting::GenerationSummary;
use crate::ui::color::{Colors, colorize};

/// Summary lines after a report was written
pub fn generation_lines(summary: &GenerationSummary) -> Vec<String> {
    let mut lines = Vec::new();
    if summary.used_sample {
        lines.push(colorize(
            &format!(
                "{} CSV file not found, rendered the built-in sample dataset",
                display::WARNING_EMOJI
            ),
            Colors::YELLOW,
        ));
    }
    lines.push(format!(
        "{} Processed {} row(s), {} shown in the table",
        display::FILE_EMOJI,
        summary.total_requests,
        summary.rows_shown
    ));
    lines.push(format!(
        "{} Report saved to {}",
        display::SUCCESS_EMOJI,
        summary.report.path().display()
    ));
    lines
}

pub fn display_generation(summary: &GenerationSummary) {
    for line in generation_lines(summary) {
        println!("{line}");
    }
}

/// One-line preview of who `send` would deliver to, if anyone is configured
pub fn ready_to_send_line(config: &RecipientConfig) -> Option<String> {
    if config.recipients.is_empty() {
        return None;
    }
    Some(format!(
        "{} Email ready to send to: {}",
        display::MAIL_EMOJI,
        config.recipients.join(", ")
    ))
}

pub fn display_ready_to_send(config: &RecipientConfig) {
    if let Some(line) = ready_to_send_line(config) {
        println!("{line}");
    }
}

/// Lines describing who the report goes to
pub fn recipient_lines(config: &RecipientConfig) -> Vec<String> {
    if config.recipients.is_empty() {
        return vec![colorize(
            &format!("{} No recipients configured", display::WARNING_EMOJI),
            Colors::YELLOW,
        )];
    }
    let mut lines = vec![format!(
        "{} Sending to {} recipient(s):",
        display::MAIL_EMOJI,
        config.recipients.len()
    )];
    lines.extend(
        config
            .recipients
            .iter()
            .enumerate()
            .map(|(i, r)| format!("   {}. {r}", i + 1)),
    );
    lines
}

pub fn display_recipients(config: &RecipientConfig) {
    for line in recipient_lines(config) {
        println!("{line}");
    }
}

pub fn send_success_line(report: &SendReport, dry_run: bool) -> String {
    if dry_run {
        format!(
            "{} Dry run: message for {} recipient(s) built, nothing sent",
            display::SUCCESS_EMOJI,
            report.recipients.len()
        )
    } else {
        format!(
            "{} Email sent successfully to {} recipient(s)",
            display::SUCCESS_EMOJI,
            report.recipients.len()
        )
    }
}

pub fn display_send_success(report: &SendReport, dry_run: bool) {
    println!("{}", colorize(&send_success_line(report, dry_run), Colors::GREEN));
}

/// Hints printed under a precondition failure
pub fn precondition_hints(err: &SendError, config: &RecipientConfig) -> Vec<String> {
    let mark = |set: bool| if set { "✓ Set" } else { "✗ Not set" };
    match err {
        SendError::MissingCredentials(_) => vec![
            format!("   SENDER_EMAIL: {}", mark(config.sender.is_some())),
            format!("   SENDER_PASSWORD: {}", mark(config.password.is_some())),
        ],
        SendError::MissingHost => vec![format!(
            "   SMTP_HOST / SMTP_SERVER: {}",
            mark(config.smtp_host.is_some())
        )],
        SendError::NoRecipients => {
            vec!["   Add a `recipients` list to the config file".to_string()]
        }
        _ => Vec::new(),
    }
}

/// Print an error to stderr
pub fn display_error(err: &LoadMailError) {
    eprintln!(
        "{}",
        colorize(&format!("{} {err}", display::ERROR_EMOJI), Colors::RED)
    );
}

/// Print a send failure, with hints for precondition failures
pub fn display_send_error(err: &SendError, config: &RecipientConfig) {
    let label = if err.is_precondition() {
        "Not sending"
    } else {
        "Error sending email"
    };
    eprintln!(
        "{}",
        colorize(&format!("{} {label}: {err}", display::ERROR_EMOJI), Colors::RED)
    );
    for hint in precondition_hints(err, config) {
        eprintln!("{hint}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::RenderedReport;

    fn summary(used_sample: bool) -> GenerationSummary {
        GenerationSummary {
            report: RenderedReport::new("output/email_summary.html", "<html></html>"),
            total_requests: 12,
            rows_shown: 10,
            used_sample,
        }
    }

    #[test]
    fn test_generation_lines() {
        let lines = generation_lines(&summary(false));
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Processed 12 row(s), 10 shown"));
        assert!(lines[1].contains("Report saved to output/email_summary.html"));

        let lines = generation_lines(&summary(true));
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("sample dataset"));
    }

    #[test]
    fn test_recipient_lines_preserve_order() {
        let config = RecipientConfig {
            recipients: vec!["z@example.com".into(), "a@example.com".into()],
            ..Default::default()
        };
        let lines = recipient_lines(&config);
        assert_eq!(lines.len(), 3);
        assert!(lines[1].ends_with("1. z@example.com"));
        assert!(lines[2].ends_with("2. a@example.com"));

        let empty = recipient_lines(&RecipientConfig::default());
        assert!(empty[0].contains("No recipients"));
    }

    #[test]
    fn test_ready_to_send_line() {
        assert!(ready_to_send_line(&RecipientConfig::default()).is_none());

        let config = RecipientConfig {
            recipients: vec!["a@example.com".into(), "b@example.com".into()],
            ..Default::default()
        };
        let line = ready_to_send_line(&config).unwrap();
        assert!(line.ends_with("Email ready to send to: a@example.com, b@example.com"));
    }

    #[test]
    fn test_send_success_line() {
        let report = SendReport {
            recipients: vec!["a@example.com".into(), "b@example.com".into()],
            subject: "s".into(),
        };
        assert!(send_success_line(&report, false).contains("sent successfully to 2"));
        assert!(send_success_line(&report, true).contains("Dry run"));
    }

    #[test]
    fn test_precondition_hints() {
        let config = RecipientConfig {
            sender: Some("perf@example.com".into()),
            ..Default::default()
        };
        let hints = precondition_hints(
            &SendError::MissingCredentials("SENDER_PASSWORD".into()),
            &config,
        );
        assert_eq!(hints[0], "   SENDER_EMAIL: ✓ Set");
        assert_eq!(hints[1], "   SENDER_PASSWORD: ✗ Not set");

        assert!(precondition_hints(&SendError::Protocol("x".into()), &config).is_empty());
        assert_eq!(precondition_hints(&SendError::MissingHost, &config).len(), 1);
    }
}
