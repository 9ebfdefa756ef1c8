use std::fmt::Debug;

use async_trait::async_trait;
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::{Coordinates, Forecast, ForecastAlert, error::WeatherError};

pub mod nws;
pub mod photon;

pub use nws::NwsProvider;
pub use photon::PhotonGeocoder;

/// Maps free-text city names to coordinates.
#[async_trait]
pub trait GeocodingProvider: Send + Sync + Debug {
    async fn resolve(&self, city: &str) -> anyhow::Result<Coordinates>;
}

/// Forecast and active alerts for a point.
#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    async fn current_forecast(&self, lat: f64, lon: f64) -> anyhow::Result<Forecast>;

    async fn alerts(&self, lat: f64, lon: f64) -> anyhow::Result<Vec<ForecastAlert>>;
}

/// Render a coordinate the way the forecast API expects it in paths and
/// query strings: four decimals with trailing zeros (and a bare dot) removed.
pub fn format_coordinate(value: f64) -> String {
    let fixed = format!("{value:.4}");
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Send `request` and decode a JSON body, mapping every failure onto
/// [`WeatherError`].
pub(crate) async fn fetch_json<T: DeserializeOwned>(
    request: RequestBuilder,
    provider: &'static str,
    operation: &'static str,
) -> Result<T, WeatherError> {
    let res = request
        .send()
        .await
        .map_err(|source| WeatherError::Transport { provider, source })?;

    let status = res.status();
    let body = res
        .text()
        .await
        .map_err(|source| WeatherError::Transport { provider, source })?;

    if !status.is_success() {
        tracing::debug!(provider, operation, %status, "provider returned non-success status");
        return Err(WeatherError::Provider { provider, status, body });
    }

    serde_json::from_str(&body).map_err(|source| WeatherError::Decode { operation, source })
}
