use lettre::Message;
use lettre::message::{Mailbox, MultiPart, SinglePart};

use crate::core::error::SendError;

/// Parse one address, reporting which role it had on failure
pub fn parse_mailbox(address: &str, role: &str) -> Result<Mailbox, SendError> {
    address
        .trim()
        .parse::<Mailbox>()
        .map_err(|e| SendError::InvalidAddress(format!("{role} '{address}': {e}")))
}

/// Parse every recipient before anything is sent
pub fn parse_recipients(recipients: &[String]) -> Result<Vec<Mailbox>, SendError> {
    recipients
        .iter()
        .map(|r| parse_mailbox(r, "recipient"))
        .collect()
}

/// Build one multipart message addressed to all recipients.
///
/// The HTML body is passed through untouched as the single part of a
/// `multipart/alternative` container. A body that is not valid UTF-8 is
/// rejected rather than rewritten.
pub fn build_message(
    from: Mailbox,
    to: Vec<Mailbox>,
    subject: &str,
    html_body: &[u8],
) -> Result<Message, SendError> {
    let html = std::str::from_utf8(html_body)
        .map_err(|e| SendError::MessageBuild(format!("report is not valid UTF-8: {e}")))?
        .to_string();

    let builder = to
        .into_iter()
        .fold(Message::builder().from(from).subject(subject), |builder, mailbox| {
            builder.to(mailbox)
        });

    builder
        .multipart(MultiPart::alternative().singlepart(SinglePart::html(html)))
        .map_err(|e| SendError::MessageBuild(e.to_string()))
}
