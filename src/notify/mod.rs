//! Email delivery
//!
//! Builds one multipart message from a rendered report and submits it to
//! every configured recipient in a single SMTP session.

pub mod message;
pub mod notifier;
pub mod transport;

pub use notifier::{Notifier, SendReport, send};
pub use transport::{MailTransport, SmtpMailTransport, StubMailTransport};
