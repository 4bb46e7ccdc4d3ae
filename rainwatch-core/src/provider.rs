use crate::{
    config::AlertConfig,
    model::{Forecast, ForecastRequest},
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use thiserror::Error;

pub mod openweather;

/// Terminal failures of the single forecast fetch. None of these are retried
/// within a run; the external scheduler decides whether to re-invoke the job.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to reach the forecast service: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("forecast request failed with status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("unexpected forecast response shape: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[async_trait]
pub trait ForecastProvider: Send + Sync {
    async fn fetch_forecast(&self, request: &ForecastRequest) -> Result<Forecast, FetchError>;
}

/// Construct the production provider from config.
pub fn provider_from_config(config: &AlertConfig) -> Box<dyn ForecastProvider> {
    Box::new(OpenWeatherProvider::new(config.api_key.clone()))
}
