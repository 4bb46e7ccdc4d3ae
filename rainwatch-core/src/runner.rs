//! Sequential orchestration of one alert run.

use thiserror::Error;
use tracing::info;

use crate::{
    config::{AlertConfig, ConfigError},
    model::ForecastRequest,
    notify::{AlertMessage, AlertSender, DeliveryError, SmtpAlertSender},
    provider::{FetchError, ForecastProvider, provider_from_config},
    rain,
};

/// What a completed run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    AlertSent,
    NoAlertNeeded,
}

/// Any stage failure ends the run; nothing is retried.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("forecast fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("alert delivery failed: {0}")]
    Delivery(#[from] DeliveryError),
}

/// Runs the fetch → decide → notify sequence once.
///
/// Holds no state between runs; a rainy forecast produces a fresh alert on
/// every invocation.
pub struct AlertRunner {
    config: AlertConfig,
    provider: Box<dyn ForecastProvider>,
    sender: Box<dyn AlertSender>,
}

impl AlertRunner {
    /// Production wiring straight from the environment.
    pub fn from_env() -> Result<Self, RunError> {
        let config = AlertConfig::from_env()?;
        Self::from_config(config)
    }

    /// Production wiring: OpenWeather provider plus SMTP sender.
    pub fn from_config(config: AlertConfig) -> Result<Self, RunError> {
        let provider = provider_from_config(&config);
        let sender = SmtpAlertSender::new(
            &config.smtp_host,
            config.smtp_port,
            &config.from_email,
            &config.email_password,
        )?;

        Ok(Self::with_parts(config, provider, Box::new(sender)))
    }

    /// Explicit wiring, used by `--dry-run` and tests.
    pub fn with_parts(
        config: AlertConfig,
        provider: Box<dyn ForecastProvider>,
        sender: Box<dyn AlertSender>,
    ) -> Self {
        Self {
            config,
            provider,
            sender,
        }
    }

    pub async fn run(&self) -> Result<RunOutcome, RunError> {
        let request = ForecastRequest {
            latitude: self.config.latitude,
            longitude: self.config.longitude,
            periods: self.config.forecast_periods,
        };

        let forecast = self.provider.fetch_forecast(&request).await?;

        if !rain::expects_rain(&forecast) {
            info!("no rain alert needed");
            return Ok(RunOutcome::NoAlertNeeded);
        }

        let message = AlertMessage::rain_alert(&self.config.from_email, &self.config.to_email);
        self.sender.send(&message).await?;
        info!("rain alert sent to {}", self.config.to_email);

        Ok(RunOutcome::AlertSent)
    }
}
