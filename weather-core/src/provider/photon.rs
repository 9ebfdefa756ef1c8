use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::{Coordinates, error::WeatherError, provider::fetch_json};

use super::GeocodingProvider;

const PROVIDER: &str = "photon";

/// Geocoder backed by the Photon (komoot) search API.
#[derive(Debug, Clone)]
pub struct PhotonGeocoder {
    base_url: String,
    http: Client,
}

impl PhotonGeocoder {
    pub fn new(base_url: impl Into<String>, http: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    fn search_url(&self) -> String {
        format!("{}/api/", self.base_url)
    }
}

#[derive(Debug, Deserialize)]
struct PhotonResponse {
    #[serde(default)]
    features: Vec<PhotonFeature>,
}

#[derive(Debug, Deserialize)]
struct PhotonFeature {
    geometry: Option<PhotonGeometry>,
    #[serde(default)]
    properties: PhotonProperties,
}

#[derive(Debug, Deserialize)]
struct PhotonGeometry {
    #[serde(default)]
    coordinates: Vec<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct PhotonProperties {
    countrycode: Option<String>,
}

/// First feature tagged "US" with a two-element `[lon, lat]` geometry.
/// Features without a geometry are skipped like any other non-match.
fn first_us_coordinates(features: &[PhotonFeature]) -> Option<Coordinates> {
    features.iter().find_map(|feature| {
        let is_us = feature.properties.countrycode.as_deref() == Some("US");
        let coordinates = feature.geometry.as_ref().map(|g| g.coordinates.as_slice());
        match coordinates.unwrap_or_default() {
            [lon, lat] if is_us => Some(Coordinates::new(*lat, *lon)),
            _ => None,
        }
    })
}

#[async_trait]
impl GeocodingProvider for PhotonGeocoder {
    async fn resolve(&self, city: &str) -> Result<Coordinates> {
        let request = self.http.get(self.search_url()).query(&[("q", city)]);

        let parsed: PhotonResponse = fetch_json(request, PROVIDER, "geocoding")
            .await
            .context("unable to request photon api")?;

        tracing::debug!(city, candidates = parsed.features.len(), "photon lookup finished");

        let coordinates = first_us_coordinates(&parsed.features)
            .ok_or_else(|| WeatherError::NotFound { city: city.to_string() })?;

        Ok(coordinates)
    }
}
