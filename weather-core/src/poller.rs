use std::time::Duration;

use anyhow::{Context, Result};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::{Coordinates, WeatherService, report::Reporter};

/// Resolves a city once, then refreshes forecast and alerts on a fixed
/// interval until cancelled.
pub struct Poller<R> {
    service: WeatherService,
    reporter: R,
    interval: Duration,
}

impl<R: Reporter> Poller<R> {
    pub fn new(service: WeatherService, reporter: R, interval: Duration) -> Self {
        Self { service, reporter, interval }
    }

    /// Geocoding failure is returned to the caller; failures inside the
    /// polling loop are reported and never end it.
    pub async fn run(&self, city: &str, cancel: &CancellationToken) -> Result<()> {
        let coords = self
            .service
            .get_coordinates(city)
            .await
            .context("unable to get coordinates information")?;

        info!(
            city,
            latitude = coords.latitude,
            longitude = coords.longitude,
            "Resolved coordinates."
        );

        self.poll(coords, cancel).await;
        Ok(())
    }

    /// Tick immediately, then once per interval. The timer restarts after
    /// every tick and cancellation wins any tie with it.
    pub async fn poll(&self, coords: Coordinates, cancel: &CancellationToken) {
        if cancel.is_cancelled() {
            info!("Application shutting down");
            return;
        }

        self.tick(coords).await;

        loop {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    info!("Application shutting down");
                    return;
                }
                _ = tokio::time::sleep(self.interval) => {
                    self.tick(coords).await;
                }
            }
        }
    }

    async fn tick(&self, coords: Coordinates) {
        debug!(latitude = coords.latitude, longitude = coords.longitude, "refreshing forecast");

        match self.service.get_forecast_and_alerts(coords).await {
            Ok((forecast, alerts)) => {
                self.reporter.forecast(&forecast);
                for alert in &alerts {
                    self.reporter.alert(alert);
                }
            }
            Err(err) => self.reporter.cycle_failed(&err),
        }
    }
}
