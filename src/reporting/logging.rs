use crate::config::RecipientConfig;
use log::{debug, error, info};
use std::path::Path;

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn // Loader fallbacks still surface
    };

    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_module_path(false)
        .format_target(false)
        .try_init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log resolved mail settings. The password is only reported as set or not set.
pub fn log_config_info(config: &RecipientConfig) {
    let host = config.smtp_host.as_deref().unwrap_or("<unset>");
    let sender = config.sender.as_deref().unwrap_or("<unset>");
    let password = if config.password.is_some() {
        "set"
    } else {
        "not set"
    };

    info!(
        "SMTP: host={host}, port={}, tls={}, timeout={}s",
        config.smtp_port, config.use_tls, config.timeout
    );
    info!("Sender: {sender}, password {password}");
    info!("Recipients ({}): {}", config.recipients.len(), config.recipients.join(", "));
}

/// Log a written report
pub fn log_report_written<P: AsRef<Path>>(path: P, total_requests: usize, rows_shown: usize) {
    info!(
        "Report written to {} ({total_requests} rows, {rows_shown} shown)",
        path.as_ref().display()
    );
}

/// Log the start of a send
pub fn log_send_start(recipient_count: usize, subject: &str) {
    info!("Sending '{subject}' to {recipient_count} recipient(s)");
}

/// Log send completion
pub fn log_send_complete(recipient_count: usize, duration_ms: u128) {
    info!("✅ Sent to {recipient_count} recipient(s) ({duration_ms}ms)");
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_logger_initialization_is_repeatable() {
        init_logger(true, false);
        init_logger(false, true);
        init_logger(false, false);
    }

    #[test]
    fn test_log_config_info_variants() {
        log_config_info(&RecipientConfig::default());

        let config = RecipientConfig {
            recipients: vec!["a@example.com".into(), "b@example.com".into()],
            sender: Some("perf@example.com".into()),
            password: Some("secret".into()),
            smtp_host: Some("smtp.example.com".into()),
            ..Default::default()
        };
        log_config_info(&config);
    }

    #[test]
    fn test_log_helpers_do_not_panic() {
        log_report_written("output/email_summary.html", 12, 10);
        log_send_start(3, "Load Test Summary Report");
        log_send_complete(3, 42);
        log_error("plain", None);

        let err = io::Error::new(io::ErrorKind::NotFound, "gone");
        log_error("with source", Some(&err));
    }
}
