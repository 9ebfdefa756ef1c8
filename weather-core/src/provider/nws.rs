use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, header::ACCEPT};
use serde::Deserialize;

use crate::{
    Forecast, ForecastAlert,
    error::WeatherError,
    provider::{fetch_json, format_coordinate},
};

use super::ForecastProvider;

const PROVIDER: &str = "api.weather.gov";
const LD_JSON: &str = "application/ld+json";

/// Forecast and alerts from the US National Weather Service API.
#[derive(Debug, Clone)]
pub struct NwsProvider {
    base_url: String,
    http: Client,
}

impl NwsProvider {
    pub fn new(base_url: impl Into<String>, http: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    fn get(&self, url: &str) -> RequestBuilder {
        self.http.get(url).header(ACCEPT, LD_JSON)
    }

    /// Resolve the grid point covering the coordinates.
    async fn point(&self, lat: f64, lon: f64) -> Result<PointResponse, WeatherError> {
        let url = format!(
            "{}/points/{},{}",
            self.base_url,
            format_coordinate(lat),
            format_coordinate(lon)
        );
        fetch_json(self.get(&url), PROVIDER, "points").await
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PointResponse {
    forecast_hourly: String,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    #[serde(default)]
    periods: Vec<ForecastPeriod>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ForecastPeriod {
    temperature: Option<f64>,
    temperature_unit: Option<String>,
    wind_speed: Option<String>,
    wind_direction: Option<String>,
    #[serde(default)]
    probability_of_precipitation: Option<QuantitativeValue>,
}

#[derive(Debug, Deserialize)]
struct QuantitativeValue {
    value: Option<u8>,
}

impl From<ForecastPeriod> for Forecast {
    fn from(period: ForecastPeriod) -> Self {
        Forecast {
            temperature: period.temperature.unwrap_or_default(),
            temperature_unit: period.temperature_unit.unwrap_or_default(),
            wind_speed: period.wind_speed.unwrap_or_default(),
            wind_direction: period.wind_direction.unwrap_or_default(),
            probability_of_precipitation: period
                .probability_of_precipitation
                .and_then(|p| p.value)
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct AlertsResponse {
    #[serde(rename = "@graph", default)]
    graph: Vec<AlertProperties>,
}

#[derive(Debug, Deserialize)]
struct AlertProperties {
    effective: Option<String>,
    expires: Option<String>,
    certainty: Option<String>,
    urgency: Option<String>,
    description: Option<String>,
    instruction: Option<String>,
}

impl From<AlertProperties> for ForecastAlert {
    fn from(alert: AlertProperties) -> Self {
        ForecastAlert {
            effective: alert.effective.unwrap_or_default(),
            expires: alert.expires.unwrap_or_default(),
            certainty: alert.certainty.unwrap_or_default(),
            urgency: alert.urgency.unwrap_or_default(),
            description: alert.description.unwrap_or_default(),
            instruction: alert.instruction.unwrap_or_default(),
        }
    }
}

#[async_trait]
impl ForecastProvider for NwsProvider {
    async fn current_forecast(&self, lat: f64, lon: f64) -> Result<Forecast> {
        let point = self
            .point(lat, lon)
            .await
            .context("unable to get point from api")?;

        let request = self.get(&point.forecast_hourly);
        let feed: ForecastResponse = fetch_json(request, PROVIDER, "forecast")
            .await
            .context("unable to get forecast from api")?;

        let current = feed.periods.into_iter().next().ok_or(WeatherError::NoData)?;

        Ok(current.into())
    }

    async fn alerts(&self, lat: f64, lon: f64) -> Result<Vec<ForecastAlert>> {
        let url = format!(
            "{}/alerts/active?point={},{}",
            self.base_url,
            format_coordinate(lat),
            format_coordinate(lon)
        );

        let parsed: AlertsResponse = fetch_json(self.get(&url), PROVIDER, "alerts")
            .await
            .context("unable to get alerts from api")?;

        Ok(parsed.graph.into_iter().map(ForecastAlert::from).collect())
    }
}
