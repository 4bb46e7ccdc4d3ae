use chrono::{DateTime, Utc};

/// What the orchestrator asks the provider for.
#[derive(Debug, Clone)]
pub struct ForecastRequest {
    pub latitude: f64,
    pub longitude: f64,
    /// Number of forecast periods to request, starting from now.
    pub periods: u8,
}

/// Provider-agnostic view of one forecast response.
#[derive(Debug, Clone)]
pub struct Forecast {
    /// Periods in the order the provider returned them.
    pub periods: Vec<ForecastPeriod>,
}

/// One time-bucketed prediction record.
#[derive(Debug, Clone)]
pub struct ForecastPeriod {
    pub at: Option<DateTime<Utc>>,
    /// Dominant condition for the period; `None` when the provider entry
    /// carried no usable condition data.
    pub condition: Option<WeatherCondition>,
}

#[derive(Debug, Clone)]
pub struct WeatherCondition {
    /// Provider condition code, e.g. 500 for light rain, 800 for clear sky.
    pub id: u16,
    pub description: String,
}
