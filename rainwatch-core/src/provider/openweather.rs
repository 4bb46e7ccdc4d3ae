use std::{fmt, time::Duration};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::{info, warn};

use crate::model::{Forecast, ForecastPeriod, ForecastRequest, WeatherCondition};

use super::{FetchError, ForecastProvider};

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Point the provider at a different host. Tests use this to run against
    /// a local stand-in server.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            http: Client::new(),
        }
    }
}

// The API key is a query parameter, so it must not surface in Debug output.
impl fmt::Debug for OpenWeatherProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenWeatherProvider")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl ForecastProvider for OpenWeatherProvider {
    async fn fetch_forecast(&self, request: &ForecastRequest) -> Result<Forecast, FetchError> {
        let url = format!("{}/data/2.5/forecast", self.base_url);

        info!(
            "fetching forecast for coordinates ({}, {})",
            request.latitude, request.longitude
        );

        let res = self
            .http
            .get(&url)
            .query(&[
                ("lat", request.latitude.to_string()),
                ("lon", request.longitude.to_string()),
                ("appid", self.api_key.clone()),
                ("cnt", request.periods.to_string()),
            ])
            .timeout(FETCH_TIMEOUT)
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        let parsed: OwForecastResponse = serde_json::from_str(&body)?;
        Ok(parsed.into_forecast())
    }
}

#[derive(Debug, Deserialize)]
struct OwCondition {
    id: Option<u16>,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt: Option<i64>,
    #[serde(default)]
    weather: Vec<OwCondition>,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    list: Vec<OwForecastEntry>,
}

impl OwForecastResponse {
    /// Convert the wire shape into the domain model. A period whose first
    /// weather entry is absent or lacks an id is kept, but carries no
    /// condition and can never match the rain rule.
    fn into_forecast(self) -> Forecast {
        let periods = self
            .list
            .into_iter()
            .map(|entry| {
                let at = entry.dt.and_then(unix_to_utc);

                let condition = match entry.weather.into_iter().next() {
                    Some(OwCondition {
                        id: Some(id),
                        description,
                    }) => Some(WeatherCondition { id, description }),
                    _ => {
                        warn!("skipping forecast period without usable condition data");
                        None
                    }
                };

                ForecastPeriod { at, condition }
            })
            .collect();

        Forecast { periods }
    }
}

fn unix_to_utc(ts: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_response_maps_to_domain_periods() {
        let raw = r#"{
            "list": [
                {"dt": 1717200000, "weather": [{"id": 500, "description": "light rain"}]},
                {"dt": 1717210800, "weather": [{"id": 800, "description": "clear sky"}]}
            ]
        }"#;

        let parsed: OwForecastResponse = serde_json::from_str(raw).expect("valid wire shape");
        let forecast = parsed.into_forecast();

        assert_eq!(forecast.periods.len(), 2);

        let first = forecast.periods[0].condition.as_ref().expect("condition present");
        assert_eq!(first.id, 500);
        assert_eq!(first.description, "light rain");
        assert!(forecast.periods[0].at.is_some());
    }

    #[test]
    fn period_with_empty_weather_list_loses_its_condition() {
        let raw = r#"{"list": [{"dt": 1717200000, "weather": []}]}"#;

        let parsed: OwForecastResponse = serde_json::from_str(raw).expect("valid wire shape");
        let forecast = parsed.into_forecast();

        assert_eq!(forecast.periods.len(), 1);
        assert!(forecast.periods[0].condition.is_none());
    }

    #[test]
    fn period_with_missing_condition_id_loses_its_condition() {
        let raw = r#"{"list": [{"dt": 1717200000, "weather": [{"description": "mystery"}]}]}"#;

        let parsed: OwForecastResponse = serde_json::from_str(raw).expect("valid wire shape");
        let forecast = parsed.into_forecast();

        assert!(forecast.periods[0].condition.is_none());
    }

    #[test]
    fn response_without_list_key_does_not_parse() {
        let raw = r#"{"cod": "200", "message": 0}"#;
        assert!(serde_json::from_str::<OwForecastResponse>(raw).is_err());
    }

    #[test]
    fn long_error_bodies_are_truncated() {
        let body = "x".repeat(500);
        let truncated = truncate_body(&body);

        assert!(truncated.len() < body.len());
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn unix_timestamps_convert_to_utc() {
        let at = unix_to_utc(0).expect("epoch is valid");
        assert_eq!(at.timestamp(), 0);
    }
}
