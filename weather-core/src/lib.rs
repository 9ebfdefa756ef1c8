//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Runtime configuration and the shared HTTP client
//! - Geocoding and forecast provider abstractions, with Photon and
//!   api.weather.gov implementations
//! - The service composing both providers, and the poller driving it
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod model;
pub mod poller;
pub mod provider;
pub mod report;
pub mod service;

pub use config::Config;
pub use error::WeatherError;
pub use model::{Coordinates, Forecast, ForecastAlert};
pub use poller::Poller;
pub use provider::{ForecastProvider, GeocodingProvider, NwsProvider, PhotonGeocoder};
pub use report::{Reporter, TracingReporter};
pub use service::WeatherService;

/// Wire the default providers from `config` into a service.
pub fn service_from_config(config: &Config) -> anyhow::Result<WeatherService> {
    config.validate()?;
    let http = config.http_client()?;

    let geocoder = PhotonGeocoder::new(config.geocoder_url.clone(), http.clone());
    let forecaster = NwsProvider::new(config.nws_url.clone(), http);

    Ok(WeatherService::new(Box::new(geocoder), Box::new(forecaster)))
}
