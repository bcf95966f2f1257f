//! Configuration management
//!
//! Recipient and SMTP settings are resolved once per process from a config
//! file (TOML or JSON) merged with environment overrides. Environment values
//! win on conflict; anything still unset falls back to the defaults in
//! [`crate::core::constants::smtp`].

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::constants::{env_vars, paths, smtp};
use crate::core::error::{LoadMailError, Result};

/// A numeric setting as written in a config file.
///
/// Accepts numbers and numeric strings; anything else is kept so the loader
/// can warn and fall back instead of rejecting the whole file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberSetting {
    Number(i64),
    Text(String),
    Other(serde_json::Value),
}

impl NumberSetting {
    fn raw(&self) -> String {
        match self {
            NumberSetting::Number(n) => n.to_string(),
            NumberSetting::Text(s) => s.clone(),
            NumberSetting::Other(_) => "<non-numeric value>".to_string(),
        }
    }
}

/// A boolean setting as written in a config file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlagSetting {
    Bool(bool),
    Text(String),
    Other(serde_json::Value),
}

/// Raw contents of a config file. Every key is optional.
///
/// ```toml
/// recipients = ["ops@example.com", "perf@example.com"]
/// sender = "loadtest@example.com"
/// smtp_host = "smtp.example.com"
/// smtp_port = 587
/// use_tls = true
/// timeout = 30
/// subject = "Nightly load test"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Addresses the report is sent to
    pub recipients: Option<Vec<String>>,

    /// Sender address, also used as the SMTP login
    pub sender: Option<String>,

    /// SMTP password (prefer `SENDER_PASSWORD` in the environment)
    pub password: Option<String>,

    /// SMTP server hostname
    pub smtp_host: Option<String>,

    /// SMTP server port
    pub smtp_port: Option<NumberSetting>,

    /// Upgrade the session with STARTTLS before authenticating
    pub use_tls: Option<FlagSetting>,

    /// Connect timeout in seconds
    pub timeout: Option<NumberSetting>,

    /// Email subject line
    pub subject: Option<String>,
}

impl FileConfig {
    /// Load a config file. `.json` files are parsed as JSON, everything else as TOML.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            LoadMailError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            serde_json::from_str(&content).map_err(|e| {
                LoadMailError::Config(format!(
                    "Invalid JSON in config file '{}': {}",
                    path.display(),
                    e
                ))
            })
        } else {
            toml::from_str(&content).map_err(|e| {
                LoadMailError::Config(format!(
                    "Invalid TOML in config file '{}': {}",
                    path.display(),
                    e
                ))
            })
        }
    }

    /// Load a config file if it exists; a missing file yields an empty config
    pub fn load_optional<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            warn!(
                "Config file '{}' not found, continuing without it",
                path.display()
            );
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }

    /// Load the first config file found in the standard locations
    pub fn load_from_standard_locations() -> Result<Self> {
        for location in paths::CONFIG_LOCATIONS {
            if Path::new(location).exists() {
                debug!("Using config file {location}");
                return Self::load_from_file(location);
            }
        }
        debug!("No config file found, using defaults");
        Ok(Self::default())
    }
}

/// Environment values that override the config file.
///
/// Empty variables count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    pub sender_email: Option<String>,
    pub sender_password: Option<String>,
    pub smtp_host: Option<String>,
    pub smtp_port: Option<String>,
    pub use_tls: Option<String>,
    pub timeout: Option<String>,
}

impl EnvOverrides {
    /// Read overrides from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read overrides through an arbitrary lookup function
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            sender_email: get(env_vars::SENDER_EMAIL),
            sender_password: get(env_vars::SENDER_PASSWORD),
            smtp_host: get(env_vars::SMTP_HOST).or_else(|| get(env_vars::SMTP_SERVER)),
            smtp_port: get(env_vars::SMTP_PORT),
            use_tls: get(env_vars::SMTP_USE_TLS),
            timeout: get(env_vars::SMTP_TIMEOUT),
        }
    }
}

/// Fully resolved mail-delivery settings. Not mutated after load.
#[derive(Clone, PartialEq, Eq)]
pub struct RecipientConfig {
    /// Target addresses, de-duplicated, in configured order
    pub recipients: Vec<String>,
    pub sender: Option<String>,
    pub password: Option<String>,
    pub smtp_host: Option<String>,
    pub smtp_port: u16,
    pub use_tls: bool,
    /// Connect timeout in seconds
    pub timeout: u64,
    pub subject: Option<String>,
}

impl Default for RecipientConfig {
    fn default() -> Self {
        Self {
            recipients: Vec::new(),
            sender: None,
            password: None,
            smtp_host: None,
            smtp_port: smtp::DEFAULT_PORT,
            use_tls: smtp::DEFAULT_USE_TLS,
            timeout: smtp::DEFAULT_TIMEOUT_SECONDS,
            subject: None,
        }
    }
}

// Hand-written so the password never ends up in logs
impl fmt::Debug for RecipientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecipientConfig")
            .field("recipients", &self.recipients)
            .field("sender", &self.sender)
            .field("password", &self.password.as_ref().map(|_| "********"))
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("use_tls", &self.use_tls)
            .field("timeout", &self.timeout)
            .field("subject", &self.subject)
            .finish()
    }
}

impl RecipientConfig {
    /// Merge file values with environment overrides (environment wins)
    pub fn resolve(file: FileConfig, env: &EnvOverrides) -> Self {
        let mut config = Self {
            recipients: normalize_recipients(file.recipients.unwrap_or_default()),
            sender: non_empty(file.sender),
            password: non_empty(file.password),
            smtp_host: non_empty(file.smtp_host),
            subject: non_empty(file.subject),
            ..Self::default()
        };

        if let Some(ref port) = file.smtp_port {
            config.smtp_port = parse_port(&port.raw(), "smtp_port");
        }
        if let Some(ref flag) = file.use_tls {
            config.use_tls = match flag {
                FlagSetting::Bool(b) => *b,
                FlagSetting::Text(s) => parse_flag(s, "use_tls"),
                FlagSetting::Other(_) => parse_flag("<non-boolean value>", "use_tls"),
            };
        }
        if let Some(ref timeout) = file.timeout {
            config.timeout = parse_timeout(&timeout.raw(), "timeout");
        }

        config.merge_with_env(env);
        config
    }

    /// Apply environment overrides on top of the current values
    pub fn merge_with_env(&mut self, env: &EnvOverrides) {
        if let Some(ref sender) = env.sender_email {
            self.sender = Some(sender.trim().to_string());
        }
        if let Some(ref password) = env.sender_password {
            self.password = Some(password.clone());
        }
        if let Some(ref host) = env.smtp_host {
            self.smtp_host = Some(host.trim().to_string());
        }
        if let Some(ref port) = env.smtp_port {
            self.smtp_port = parse_port(port, env_vars::SMTP_PORT);
        }
        if let Some(ref flag) = env.use_tls {
            self.use_tls = parse_flag(flag, env_vars::SMTP_USE_TLS);
        }
        if let Some(ref timeout) = env.timeout {
            self.timeout = parse_timeout(timeout, env_vars::SMTP_TIMEOUT);
        }
    }

    /// Connect timeout as Duration
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// Subject to use: explicit argument, then config, then the default
    pub fn subject_or_default<'a>(&'a self, explicit: Option<&'a str>) -> &'a str {
        explicit
            .or(self.subject.as_deref())
            .unwrap_or(smtp::DEFAULT_SUBJECT)
    }
}

/// Resolves a [`RecipientConfig`] from files and the environment
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_file: Option<PathBuf>,
    use_config_file: bool,
    load_dotenv: bool,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self {
            config_file: None,
            use_config_file: true,
            load_dotenv: true,
        }
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read this file instead of probing the standard locations
    pub fn with_config_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Skip config files entirely; only the environment is consulted
    pub fn without_config_file(mut self) -> Self {
        self.use_config_file = false;
        self
    }

    /// Do not load dotenv files before reading the environment
    pub fn without_dotenv(mut self) -> Self {
        self.load_dotenv = false;
        self
    }

    /// Load the config file, then apply process-environment overrides
    pub fn load(&self) -> Result<RecipientConfig> {
        if self.load_dotenv {
            load_dotenv_files();
        }
        self.load_with_env(&EnvOverrides::from_env())
    }

    /// Load the config file, then apply the given overrides
    pub fn load_with_env(&self, env: &EnvOverrides) -> Result<RecipientConfig> {
        let file = if !self.use_config_file {
            FileConfig::default()
        } else if let Some(ref path) = self.config_file {
            FileConfig::load_optional(path)?
        } else {
            FileConfig::load_from_standard_locations()?
        };

        Ok(RecipientConfig::resolve(file, env))
    }
}

/// Load dotenv files without replacing variables already in the environment
fn load_dotenv_files() {
    for location in paths::DOTENV_LOCATIONS {
        let path = Path::new(location);
        if !path.exists() {
            continue;
        }
        match dotenvy::from_path(path) {
            Ok(()) => debug!("Loaded environment from {location}"),
            Err(e) => warn!("Could not load {location}: {e}"),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn normalize_recipients(recipients: Vec<String>) -> Vec<String> {
    let mut seen = Vec::with_capacity(recipients.len());
    for recipient in recipients {
        let recipient = recipient.trim();
        if recipient.is_empty() || seen.iter().any(|r: &String| r == recipient) {
            continue;
        }
        seen.push(recipient.to_string());
    }
    seen
}

fn parse_port(raw: &str, source: &str) -> u16 {
    match raw.trim().parse::<u16>() {
        Ok(port) if port > 0 => port,
        _ => {
            warn!(
                "Invalid {source} '{raw}', using default {}",
                smtp::DEFAULT_PORT
            );
            smtp::DEFAULT_PORT
        }
    }
}

fn parse_timeout(raw: &str, source: &str) -> u64 {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => secs,
        _ => {
            warn!(
                "Invalid {source} '{raw}', using default {}s",
                smtp::DEFAULT_TIMEOUT_SECONDS
            );
            smtp::DEFAULT_TIMEOUT_SECONDS
        }
    }
}

fn parse_flag(raw: &str, source: &str) -> bool {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => true,
        "false" | "0" | "no" | "off" => false,
        _ => {
            warn!(
                "Invalid {source} '{raw}', using default {}",
                smtp::DEFAULT_USE_TLS
            );
            smtp::DEFAULT_USE_TLS
        }
    }
}
