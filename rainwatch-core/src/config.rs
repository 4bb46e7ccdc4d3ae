//! Runtime configuration for the alert job.
//!
//! Everything comes from environment variables so the job can run unattended
//! under a scheduler. Non-secret fields fall back to documented defaults; the
//! two secrets must be present and non-empty before anything touches the
//! network.
//!
//! | Variable | Required | Default |
//! |----------|----------|---------|
//! | `WEATHER_LAT` | No | `43.817070` |
//! | `WEATHER_LON` | No | `125.323547` |
//! | `OPENWEATHER_API_KEY` | Yes | — |
//! | `EMAIL_PASSWORD` | Yes | — |
//! | `FROM_EMAIL` | No | `your-email@gmail.com` |
//! | `TO_EMAIL` | No | `recipient@example.com` |
//! | `FORECAST_PERIODS` | No | `4` |
//! | `SMTP_HOST` | No | `smtp.gmail.com` |
//! | `SMTP_PORT` | No | `587` |

use std::{env, fmt, str::FromStr};

use thiserror::Error;

pub const DEFAULT_LATITUDE: f64 = 43.817_070;
pub const DEFAULT_LONGITUDE: f64 = 125.323_547;
pub const DEFAULT_FROM_EMAIL: &str = "your-email@gmail.com";
pub const DEFAULT_TO_EMAIL: &str = "recipient@example.com";
pub const DEFAULT_FORECAST_PERIODS: u8 = 4;
pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
pub const DEFAULT_SMTP_PORT: u16 = 587;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    MissingSecret(&'static str),

    #[error("invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

/// Immutable settings for one run.
#[derive(Clone)]
pub struct AlertConfig {
    pub latitude: f64,
    pub longitude: f64,
    pub api_key: String,
    pub email_password: String,
    pub from_email: String,
    pub to_email: String,
    /// How many forecast periods to inspect for rain.
    pub forecast_periods: u8,
    pub smtp_host: String,
    pub smtp_port: u16,
}

impl AlertConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    // Constructor over an arbitrary lookup; tests feed it maps instead of
    // mutating the real environment.
    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            latitude: parse_or_default(&lookup, "WEATHER_LAT", DEFAULT_LATITUDE)?,
            longitude: parse_or_default(&lookup, "WEATHER_LON", DEFAULT_LONGITUDE)?,
            api_key: required_secret(&lookup, "OPENWEATHER_API_KEY")?,
            email_password: required_secret(&lookup, "EMAIL_PASSWORD")?,
            from_email: string_or_default(&lookup, "FROM_EMAIL", DEFAULT_FROM_EMAIL),
            to_email: string_or_default(&lookup, "TO_EMAIL", DEFAULT_TO_EMAIL),
            forecast_periods: parse_or_default(
                &lookup,
                "FORECAST_PERIODS",
                DEFAULT_FORECAST_PERIODS,
            )?,
            smtp_host: string_or_default(&lookup, "SMTP_HOST", DEFAULT_SMTP_HOST),
            smtp_port: parse_or_default(&lookup, "SMTP_PORT", DEFAULT_SMTP_PORT)?,
        })
    }
}

// Secrets must never reach log output, so Debug prints placeholders.
impl fmt::Debug for AlertConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlertConfig")
            .field("latitude", &self.latitude)
            .field("longitude", &self.longitude)
            .field("api_key", &"<redacted>")
            .field("email_password", &"<redacted>")
            .field("from_email", &self.from_email)
            .field("to_email", &self.to_email)
            .field("forecast_periods", &self.forecast_periods)
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .finish()
    }
}

fn required_secret<F>(lookup: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingSecret(name)),
    }
}

fn string_or_default<F>(lookup: &F, name: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if !value.is_empty() => value,
        _ => default.to_string(),
    }
}

fn parse_or_default<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { name, value }),
        None => Ok(default),
    }
}
