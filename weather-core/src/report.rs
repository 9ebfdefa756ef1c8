use tracing::{error, info, warn};

use crate::{Forecast, ForecastAlert};

/// Output handle the poller renders each cycle through.
pub trait Reporter: Send + Sync {
    fn forecast(&self, forecast: &Forecast);

    fn alert(&self, alert: &ForecastAlert);

    /// A cycle failed; the poller keeps going.
    fn cycle_failed(&self, error: &anyhow::Error);
}

/// Emits structured `tracing` events: info for the forecast, one warning per alert.
#[derive(Debug, Clone)]
pub struct TracingReporter {
    city: String,
}

impl TracingReporter {
    pub fn new(city: impl Into<String>) -> Self {
        Self { city: city.into() }
    }
}

impl Reporter for TracingReporter {
    fn forecast(&self, forecast: &Forecast) {
        info!(
            city = %self.city,
            temperature = %format_temperature(forecast),
            wind_speed = %forecast.wind_speed,
            wind_direction = %forecast.wind_direction,
            probability_of_precipitation = forecast.probability_of_precipitation,
            "New forecast information."
        );
    }

    fn alert(&self, alert: &ForecastAlert) {
        warn!(
            city = %self.city,
            effective = %alert.effective,
            expires = %alert.expires,
            certainty = %alert.certainty,
            urgency = %alert.urgency,
            description = %alert.description,
            instruction = %alert.instruction,
            "Alert"
        );
    }

    fn cycle_failed(&self, err: &anyhow::Error) {
        error!(
            city = %self.city,
            err = %format!("{err:#}"),
            "Unable to get forecast or alerts information."
        );
    }
}

pub fn format_temperature(forecast: &Forecast) -> String {
    format!("{:.2} {}", forecast.temperature, forecast.temperature_unit)
}
