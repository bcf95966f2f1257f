//! Mail transports
//!
//! [`MailTransport`] is the seam between the notifier and the network. Each
//! `deliver` call is one SMTP session carrying one message.

use async_trait::async_trait;
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::stub::AsyncStubTransport;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use log::debug;

use crate::config::RecipientConfig;
use crate::core::error::SendError;

#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Open a session, submit `message` to every envelope recipient, close the session
    async fn deliver(&self, message: Message) -> Result<(), SendError>;
}

/// SMTP submission through lettre's async transport on tokio
pub struct SmtpMailTransport {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailTransport {
    /// Build a transport for `host:port`.
    ///
    /// With `use_tls` the session is upgraded with STARTTLS before
    /// authenticating; otherwise it stays plain text.
    pub fn new(
        config: &RecipientConfig,
        host: &str,
        username: &str,
        password: &str,
    ) -> Result<Self, SendError> {
        let builder = if config.use_tls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)
                .map_err(|e| SendError::Connection(format!("{host}: {e}")))?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
        };

        let transport = builder
            .port(config.smtp_port)
            .credentials(Credentials::new(username.to_string(), password.to_string()))
            .timeout(Some(config.timeout_duration()))
            .build();

        debug!(
            "SMTP transport ready for {host}:{} (tls={})",
            config.smtp_port, config.use_tls
        );
        Ok(Self { transport })
    }
}

#[async_trait]
impl MailTransport for SmtpMailTransport {
    async fn deliver(&self, message: Message) -> Result<(), SendError> {
        let response = self.transport.send(message).await.map_err(classify_smtp_error)?;
        debug!("SMTP server accepted message: {:?}", response.code());
        Ok(())
    }
}

/// A stub transport that accepts every message without any network.
/// Used for dry runs.
pub struct StubMailTransport {
    transport: AsyncStubTransport,
}

impl StubMailTransport {
    /// A stub that always succeeds
    pub fn new() -> Self {
        Self {
            transport: AsyncStubTransport::new_ok(),
        }
    }
}

impl Default for StubMailTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MailTransport for StubMailTransport {
    async fn deliver(&self, message: Message) -> Result<(), SendError> {
        self.transport
            .send(message)
            .await
            .map_err(|e| SendError::Protocol(e.to_string()))
    }
}

/// Map a lettre SMTP error onto the notifier's failure taxonomy.
///
/// 53x replies are authentication failures; timeouts and failures without a
/// server reply are connection failures; everything else is protocol-level.
pub fn classify_smtp_error(err: lettre::transport::smtp::Error) -> SendError {
    let detail = err.to_string();

    if err.is_timeout() {
        return SendError::Connection(detail);
    }

    if let Some(code) = err.status() {
        return classify_reply_code(&code.to_string(), detail);
    }

    if err.is_response() || err.is_client() {
        SendError::Protocol(detail)
    } else {
        SendError::Connection(detail)
    }
}

/// Classify by three-digit SMTP reply code
fn classify_reply_code(code: &str, detail: String) -> SendError {
    if code.starts_with("53") {
        SendError::Authentication(detail)
    } else {
        SendError::Protocol(detail)
    }
}
