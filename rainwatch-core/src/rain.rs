//! The rain decision rule.

use tracing::info;

use crate::model::Forecast;

/// Provider condition codes below this value denote precipitation-class
/// phenomena: 2xx thunderstorm, 3xx drizzle, 5xx rain, 6xx snow. Codes from
/// 700 up are atmosphere, clear, and clouds.
pub const PRECIPITATION_CODE_CEILING: u16 = 700;

/// Returns true when at least one forecast period predicts precipitation.
///
/// The scan follows provider order and stops at the first qualifying period.
/// Periods without a usable condition are ignored; an empty forecast carries
/// no rain evidence and yields false.
pub fn expects_rain(forecast: &Forecast) -> bool {
    for period in &forecast.periods {
        let Some(condition) = &period.condition else {
            continue;
        };

        if condition.id < PRECIPITATION_CODE_CEILING {
            info!(
                "rain expected: {} (code {})",
                condition.description, condition.id
            );
            return true;
        }
    }

    info!("no rain expected in the forecast window");
    false
}
