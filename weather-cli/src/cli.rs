use std::time::Duration;

use clap::Parser;
use tokio_util::sync::CancellationToken;
use weather_core::{Config, Poller, TracingReporter, config, service_from_config};

use crate::{shutdown, telemetry::LogFormat};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "weather",
    version,
    about = "Poll the current forecast and active alerts for a US city"
)]
pub struct Cli {
    /// City name, e.g. "Philadelphia".
    pub city: String,

    /// Seconds between refreshes.
    #[arg(
        long,
        env = "WEATHER_INTERVAL_SECS",
        default_value_t = config::DEFAULT_REFRESH_INTERVAL.as_secs()
    )]
    pub interval_secs: u64,

    /// Per-request timeout in seconds.
    #[arg(
        long,
        env = "WEATHER_TIMEOUT_SECS",
        default_value_t = config::DEFAULT_REQUEST_TIMEOUT.as_secs()
    )]
    pub timeout_secs: u64,

    /// Base URL of the Photon geocoder.
    #[arg(long, env = "WEATHER_GEOCODER_URL", default_value = config::DEFAULT_GEOCODER_URL)]
    pub geocoder_url: String,

    /// Base URL of the api.weather.gov forecast service.
    #[arg(long, env = "WEATHER_NWS_URL", default_value = config::DEFAULT_NWS_URL)]
    pub nws_url: String,

    #[arg(long, env = "WEATHER_LOG_FORMAT", value_enum, default_value_t = LogFormat::Json)]
    pub log_format: LogFormat,
}

impl Cli {
    pub fn config(&self) -> Config {
        Config {
            geocoder_url: self.geocoder_url.clone(),
            nws_url: self.nws_url.clone(),
            refresh_interval: Duration::from_secs(self.interval_secs),
            request_timeout: Duration::from_secs(self.timeout_secs),
            ..Config::default()
        }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let config = self.config();
        let service = service_from_config(&config)?;

        let cancel = CancellationToken::new();
        shutdown::cancel_on_signal(cancel.clone());

        let reporter = TracingReporter::new(&self.city);
        let poller = Poller::new(service, reporter, config.refresh_interval);
        poller.run(&self.city, &cancel).await
    }
}
