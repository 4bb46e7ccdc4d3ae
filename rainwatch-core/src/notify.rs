use async_trait::async_trait;
use thiserror::Error;

pub mod noop;
pub mod smtp;

pub use noop::NoopAlertSender;
pub use smtp::SmtpAlertSender;

/// Subject line of the one mail this job ever sends.
pub const RAIN_ALERT_SUBJECT: &str = "Rain Alert - Don't Forget Your Umbrella!";

const RAIN_ALERT_BODY: &str = "\
Hello!

The weather forecast indicates rain is expected in your area within the next few hours.

Remember to bring an umbrella when you go out!

Stay dry,
Your Weather Alert System
";

/// A fully addressed, plain-text notification.
#[derive(Debug, Clone)]
pub struct AlertMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl AlertMessage {
    /// The canonical umbrella reminder.
    pub fn rain_alert(from: &str, to: &str) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            subject: RAIN_ALERT_SUBJECT.to_string(),
            body: RAIN_ALERT_BODY.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("invalid mail address: {0}")]
    InvalidAddress(String),

    #[error("failed to build mail message: {0}")]
    Build(#[from] lettre::error::Error),

    #[error("SMTP failure: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

/// Sends exactly one alert message per call. Implementations own whatever
/// session state the send requires and release it on every exit path.
#[async_trait]
pub trait AlertSender: Send + Sync {
    async fn send(&self, message: &AlertMessage) -> Result<(), DeliveryError>;
}
