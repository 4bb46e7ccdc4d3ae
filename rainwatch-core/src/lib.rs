//! Core library for the `rainwatch` alert job.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Abstraction over the forecast provider and its OpenWeatherMap client
//! - The rain decision rule
//! - Alert dispatch over SMTP and the run orchestration around it
//!
//! It is used by `rainwatch-cli`, but can also be reused by other binaries or
//! services.

pub mod config;
pub mod model;
pub mod notify;
pub mod provider;
pub mod rain;
pub mod runner;

pub use config::{AlertConfig, ConfigError};
pub use model::{Forecast, ForecastPeriod, ForecastRequest, WeatherCondition};
pub use notify::{AlertMessage, AlertSender, DeliveryError, NoopAlertSender, SmtpAlertSender};
pub use provider::{FetchError, ForecastProvider, openweather::OpenWeatherProvider};
pub use runner::{AlertRunner, RunError, RunOutcome};
