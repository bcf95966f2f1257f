/// Application-wide constants to avoid magic values throughout the codebase.
///
/// This module centralizes file locations, SMTP defaults, CSV column names,
/// and report layout values so they are easy to find and adjust.
/// Default file locations
pub mod paths {
    /// CSV input read by `generate` when no path is given
    pub const DEFAULT_CSV: &str = "csv_files/load_test_results.csv";
    /// Rendered report written by `generate` and read by `send`
    pub const DEFAULT_REPORT: &str = "output/email_summary.html";
    /// Config files probed in order when `--config` is not given
    pub const CONFIG_LOCATIONS: [&str; 3] = [
        ".loadmail.toml",
        "config/recipients.toml",
        "config/recipients.json",
    ];
    /// Dotenv files loaded before environment overrides are resolved
    pub const DOTENV_LOCATIONS: [&str; 2] = ["config/.env", ".env"];
}

/// SMTP defaults applied when neither the config file nor the environment sets a value
pub mod smtp {
    /// Submission port with STARTTLS
    pub const DEFAULT_PORT: u16 = 587;
    /// STARTTLS is on unless explicitly disabled
    pub const DEFAULT_USE_TLS: bool = true;
    /// Connect timeout in seconds
    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
    /// Subject used when neither the CLI nor the config file provides one
    pub const DEFAULT_SUBJECT: &str = "Load Test Summary Report";
}

/// Environment variable names that override config file values
pub mod env_vars {
    pub const SENDER_EMAIL: &str = "SENDER_EMAIL";
    pub const SENDER_PASSWORD: &str = "SENDER_PASSWORD";
    /// Preferred over `SMTP_SERVER` when both are set
    pub const SMTP_HOST: &str = "SMTP_HOST";
    pub const SMTP_SERVER: &str = "SMTP_SERVER";
    pub const SMTP_PORT: &str = "SMTP_PORT";
    pub const SMTP_USE_TLS: &str = "SMTP_USE_TLS";
    pub const SMTP_TIMEOUT: &str = "SMTP_TIMEOUT";
}

/// CSV column names the report table reads, referenced by name
pub mod columns {
    pub const TEST_NAME: &str = "test_name";
    pub const ENDPOINT: &str = "endpoint";
    pub const RESPONSE_TIME_MS: &str = "response_time_ms";
    pub const STATUS_CODE: &str = "status_code";
    pub const REQUESTS_PER_SECOND: &str = "requests_per_second";
    pub const TIMESTAMP: &str = "timestamp";

    /// Schema of the built-in sample dataset
    pub const SAMPLE_SCHEMA: [&str; 6] = [
        TEST_NAME,
        ENDPOINT,
        RESPONSE_TIME_MS,
        STATUS_CODE,
        REQUESTS_PER_SECOND,
        TIMESTAMP,
    ];
}

/// Report layout values
pub mod report {
    /// Maximum number of rows rendered in the results table
    pub const MAX_TABLE_ROWS: usize = 10;
    /// Rendered for a referenced column that is missing or blank in a row
    pub const MISSING_VALUE: &str = "N/A";
    /// Document title and main heading
    pub const TITLE: &str = "Load Test Summary Report";
    /// Format of the generation timestamp
    pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
}

/// Process exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
    /// Notifier refused to send before touching the network
    pub const PRECONDITION: i32 = 2;
}

/// Display and formatting constants
pub mod display {
    pub const SUCCESS_EMOJI: &str = "✅";
    pub const WARNING_EMOJI: &str = "⚠️";
    pub const ERROR_EMOJI: &str = "❌";
    pub const MAIL_EMOJI: &str = "📧";
    pub const FILE_EMOJI: &str = "📁";
}
