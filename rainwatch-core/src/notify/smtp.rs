use std::time::Duration;

use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, header::ContentType},
    transport::smtp::authentication::Credentials,
};
use tracing::info;

use super::{AlertMessage, AlertSender, DeliveryError};

const SMTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Submits alerts over an authenticated STARTTLS session.
///
/// The transport negotiates TLS before authenticating and releases the
/// connection when the send returns, success or failure.
pub struct SmtpAlertSender {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpAlertSender {
    /// Build a sender for the given submission endpoint. The credential pair
    /// is the sender address plus an app-style password.
    pub fn new(
        host: &str,
        port: u16,
        username: &str,
        password: &str,
    ) -> Result<Self, DeliveryError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)?
            .port(port)
            .credentials(Credentials::new(username.to_string(), password.to_string()))
            .timeout(Some(SMTP_TIMEOUT))
            .build();

        Ok(Self { transport })
    }
}

#[async_trait]
impl AlertSender for SmtpAlertSender {
    async fn send(&self, message: &AlertMessage) -> Result<(), DeliveryError> {
        let email = build_email(message)?;

        info!("sending alert mail to {}", message.to);
        self.transport.send(email).await?;
        info!("alert mail accepted for {}", message.to);

        Ok(())
    }
}

fn build_email(message: &AlertMessage) -> Result<Message, DeliveryError> {
    Ok(Message::builder()
        .from(parse_mailbox(&message.from)?)
        .to(parse_mailbox(&message.to)?)
        .subject(message.subject.as_str())
        .header(ContentType::TEXT_PLAIN)
        .body(message.body.clone())?)
}

fn parse_mailbox(address: &str) -> Result<Mailbox, DeliveryError> {
    address
        .parse()
        .map_err(|e| DeliveryError::InvalidAddress(format!("{address}: {e}")))
}
