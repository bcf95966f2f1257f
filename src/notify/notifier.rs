use log::debug;
use std::time::Instant;

use crate::config::RecipientConfig;
use crate::core::error::SendError;
use crate::notify::message::{build_message, parse_mailbox, parse_recipients};
use crate::notify::transport::{MailTransport, SmtpMailTransport};
use crate::reporting::logging;

/// What a successful send delivered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendReport {
    pub recipients: Vec<String>,
    pub subject: String,
}

/// Settings that passed every precondition
struct Checked<'a> {
    sender: &'a str,
    password: &'a str,
    host: &'a str,
}

/// Delivers a rendered report by email.
///
/// Holds an already-resolved [`RecipientConfig`]; it never reads the
/// environment itself. No send is ever retried.
#[derive(Debug, Clone)]
pub struct Notifier {
    config: RecipientConfig,
}

impl Notifier {
    pub fn new(config: RecipientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RecipientConfig {
        &self.config
    }

    /// Check everything that can be checked without the network
    pub fn check_preconditions(&self) -> Result<(), SendError> {
        self.checked().map(|_| ())
    }

    fn checked(&self) -> Result<Checked<'_>, SendError> {
        let sender = self
            .config
            .sender
            .as_deref()
            .ok_or_else(|| SendError::MissingCredentials("SENDER_EMAIL".into()))?;
        let password = self
            .config
            .password
            .as_deref()
            .ok_or_else(|| SendError::MissingCredentials("SENDER_PASSWORD".into()))?;
        let host = self
            .config
            .smtp_host
            .as_deref()
            .ok_or(SendError::MissingHost)?;
        if self.config.recipients.is_empty() {
            return Err(SendError::NoRecipients);
        }

        Ok(Checked {
            sender,
            password,
            host,
        })
    }

    /// Send over SMTP using the configured host, port, TLS mode and credentials
    pub async fn send(&self, subject: &str, html_body: &[u8]) -> Result<SendReport, SendError> {
        let checked = self.checked()?;
        let transport =
            SmtpMailTransport::new(&self.config, checked.host, checked.sender, checked.password)?;
        self.send_via(&transport, subject, html_body).await
    }

    /// Send through the given transport after the same precondition checks
    pub async fn send_via<T>(
        &self,
        transport: &T,
        subject: &str,
        html_body: &[u8],
    ) -> Result<SendReport, SendError>
    where
        T: MailTransport + ?Sized,
    {
        let checked = self.checked()?;
        let from = parse_mailbox(checked.sender, "sender")?;
        let to = parse_recipients(&self.config.recipients)?;
        let message = build_message(from, to, subject, html_body)?;

        logging::log_send_start(self.config.recipients.len(), subject);
        let start = Instant::now();
        transport.deliver(message).await?;
        logging::log_send_complete(self.config.recipients.len(), start.elapsed().as_millis());
        debug!("Delivered to {}", self.config.recipients.join(", "));

        Ok(SendReport {
            recipients: self.config.recipients.clone(),
            subject: subject.to_string(),
        })
    }
}

/// Send `html_body` to every recipient in `config` over SMTP
pub async fn send(
    config: RecipientConfig,
    subject: &str,
    html_body: &[u8],
) -> Result<SendReport, SendError> {
    Notifier::new(config).send(subject, html_body).await
}
