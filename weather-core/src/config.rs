use std::time::Duration;

use anyhow::{Context, Result, bail};
use reqwest::Client;

pub const DEFAULT_GEOCODER_URL: &str = "https://photon.komoot.io";
pub const DEFAULT_NWS_URL: &str = "https://api.weather.gov";
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(10);
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Runtime settings for the providers and the polling loop.
///
/// Nothing is read from disk; the CLI fills this from flags and environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the Photon geocoder, without the `/api/` suffix.
    pub geocoder_url: String,

    /// Base URL of the api.weather.gov compatible forecast service.
    pub nws_url: String,

    /// Delay between the end of one poll cycle and the start of the next.
    pub refresh_interval: Duration,

    /// Ceiling for every single HTTP request.
    pub request_timeout: Duration,

    /// api.weather.gov refuses requests without one.
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            geocoder_url: DEFAULT_GEOCODER_URL.to_string(),
            nws_url: DEFAULT_NWS_URL.to_string(),
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            user_agent: concat!("weather-cli/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.geocoder_url.trim().is_empty() {
            bail!("Geocoder URL must not be empty.");
        }
        if self.nws_url.trim().is_empty() {
            bail!("Forecast API URL must not be empty.");
        }
        if self.refresh_interval.is_zero() {
            bail!("Refresh interval must be greater than zero.");
        }
        if self.request_timeout.is_zero() {
            bail!("Request timeout must be greater than zero.");
        }
        Ok(())
    }

    /// Build the HTTP client shared by both providers.
    pub fn http_client(&self) -> Result<Client> {
        Client::builder()
            .timeout(self.request_timeout)
            .user_agent(self.user_agent.as_str())
            .build()
            .context("Failed to build HTTP client")
    }
}
