use std::fmt;

/// Failures surfaced by the notifier.
///
/// The first four variants are detected before any network activity and are
/// never worth retrying without fixing the configuration first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendError {
    /// Sender address or password is not configured
    MissingCredentials(String),

    /// No SMTP host is configured
    MissingHost,

    /// The recipient list is empty
    NoRecipients,

    /// A sender or recipient address could not be parsed
    InvalidAddress(String),

    /// The message could not be assembled
    MessageBuild(String),

    /// The server rejected the credentials
    Authentication(String),

    /// Host unreachable, connection refused, or timed out
    Connection(String),

    /// Any other SMTP-level failure
    Protocol(String),
}

impl SendError {
    /// True when the failure was detected before any network call
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            SendError::MissingCredentials(_)
                | SendError::MissingHost
                | SendError::NoRecipients
                | SendError::InvalidAddress(_)
        )
    }
}

impl fmt::Display for SendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SendError::MissingCredentials(what) => {
                write!(f, "Missing sender credentials: {what} not set")
            }
            SendError::MissingHost => write!(f, "Missing SMTP host: set smtp_host or SMTP_HOST"),
            SendError::NoRecipients => write!(f, "No recipients: recipient list is empty"),
            SendError::InvalidAddress(msg) => write!(f, "Invalid address: {msg}"),
            SendError::MessageBuild(msg) => write!(f, "Message build error: {msg}"),
            SendError::Authentication(msg) => write!(f, "Authentication failure: {msg}"),
            SendError::Connection(msg) => write!(f, "Connection failure: {msg}"),
            SendError::Protocol(msg) => write!(f, "SMTP protocol failure: {msg}"),
        }
    }
}

impl std::error::Error for SendError {}

/// Comprehensive error types for loadmail operations
#[derive(Debug)]
pub enum LoadMailError {
    /// IO error (file operations, etc.)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// CSV reading error (malformed or non-UTF-8 input)
    Csv(csv::Error),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// JSON parsing error
    JsonParsing(serde_json::Error),

    /// File not found error
    FileNotFound(String),

    /// Email delivery error
    Send(SendError),
}

impl LoadMailError {
    /// True for notifier failures detected before any network call
    pub fn is_precondition(&self) -> bool {
        matches!(self, LoadMailError::Send(err) if err.is_precondition())
    }
}

impl fmt::Display for LoadMailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadMailError::Io(err) => write!(f, "IO error: {err}"),
            LoadMailError::Config(msg) => write!(f, "Configuration error: {msg}"),
            LoadMailError::Csv(err) => write!(f, "CSV error: {err}"),
            LoadMailError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            LoadMailError::JsonParsing(err) => write!(f, "JSON parsing error: {err}"),
            LoadMailError::FileNotFound(path) => write!(f, "File not found: {path}"),
            LoadMailError::Send(err) => write!(f, "Send error: {err}"),
        }
    }
}

impl std::error::Error for LoadMailError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadMailError::Io(err) => Some(err),
            LoadMailError::Csv(err) => Some(err),
            LoadMailError::TomlParsing(err) => Some(err),
            LoadMailError::JsonParsing(err) => Some(err),
            LoadMailError::Send(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LoadMailError {
    fn from(err: std::io::Error) -> Self {
        LoadMailError::Io(err)
    }
}

impl From<csv::Error> for LoadMailError {
    fn from(err: csv::Error) -> Self {
        LoadMailError::Csv(err)
    }
}

impl From<toml::de::Error> for LoadMailError {
    fn from(err: toml::de::Error) -> Self {
        LoadMailError::TomlParsing(err)
    }
}

impl From<serde_json::Error> for LoadMailError {
    fn from(err: serde_json::Error) -> Self {
        LoadMailError::JsonParsing(err)
    }
}

impl From<SendError> for LoadMailError {
    fn from(err: SendError) -> Self {
        LoadMailError::Send(err)
    }
}

/// Type alias for Results using LoadMailError
pub type Result<T> = std::result::Result<T, LoadMailError>;
