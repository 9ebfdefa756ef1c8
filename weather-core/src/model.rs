/// A resolved point on the map. Resolved once per run and reused for every poll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// The current forecast period, passed through verbatim from the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    pub temperature: f64,
    pub temperature_unit: String,
    pub wind_speed: String,
    pub wind_direction: String,
    pub probability_of_precipitation: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastAlert {
    pub effective: String,
    pub expires: String,
    pub certainty: String,
    pub urgency: String,
    pub description: String,
    pub instruction: String,
}
