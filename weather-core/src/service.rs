use anyhow::{Context, Result};

use crate::{
    Coordinates, Forecast, ForecastAlert,
    provider::{ForecastProvider, GeocodingProvider},
};

/// Puts a geocoder and a forecast provider behind one interface.
#[derive(Debug)]
pub struct WeatherService {
    geocoder: Box<dyn GeocodingProvider>,
    forecaster: Box<dyn ForecastProvider>,
}

impl WeatherService {
    pub fn new(
        geocoder: Box<dyn GeocodingProvider>,
        forecaster: Box<dyn ForecastProvider>,
    ) -> Self {
        Self { geocoder, forecaster }
    }

    pub async fn get_coordinates(&self, city: &str) -> Result<Coordinates> {
        self.geocoder.resolve(city).await
    }

    /// Fetch the forecast, then the alerts. All or nothing: if either call
    /// fails nothing is returned, and alerts are not requested at all when the
    /// forecast fails.
    pub async fn get_forecast_and_alerts(
        &self,
        coords: Coordinates,
    ) -> Result<(Forecast, Vec<ForecastAlert>)> {
        let forecast = self
            .forecaster
            .current_forecast(coords.latitude, coords.longitude)
            .await
            .context("unable to get forecast information")?;

        let alerts = self
            .forecaster
            .alerts(coords.latitude, coords.longitude)
            .await
            .context("unable to get alerts information")?;

        Ok((forecast, alerts))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::WeatherError;
    use async_trait::async_trait;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug)]
    pub(crate) struct StubGeocoder(pub Option<Coordinates>);

    #[async_trait]
    impl GeocodingProvider for StubGeocoder {
        async fn resolve(&self, city: &str) -> Result<Coordinates> {
            self.0.ok_or_else(|| WeatherError::NotFound { city: city.to_string() }.into())
        }
    }

    /// Forecast provider with canned answers and call counters.
    #[derive(Debug, Default)]
    pub(crate) struct StubForecaster {
        pub forecast: Option<Forecast>,
        pub alerts: Option<Vec<ForecastAlert>>,
        pub forecast_calls: Arc<AtomicUsize>,
        pub alert_calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl ForecastProvider for StubForecaster {
        async fn current_forecast(&self, _lat: f64, _lon: f64) -> Result<Forecast> {
            self.forecast_calls.fetch_add(1, Ordering::SeqCst);
            self.forecast.clone().ok_or_else(|| WeatherError::NoData.into())
        }

        async fn alerts(&self, _lat: f64, _lon: f64) -> Result<Vec<ForecastAlert>> {
            self.alert_calls.fetch_add(1, Ordering::SeqCst);
            self.alerts
                .clone()
                .ok_or_else(|| anyhow::anyhow!("alerts endpoint unavailable"))
        }
    }

    pub(crate) fn sample_forecast() -> Forecast {
        Forecast {
            temperature: 72.5,
            temperature_unit: "F".into(),
            wind_speed: "10 mph".into(),
            wind_direction: "NW".into(),
            probability_of_precipitation: 20,
        }
    }

    pub(crate) fn sample_alert() -> ForecastAlert {
        ForecastAlert {
            effective: "2026-10-19T10:00:00-04:00".into(),
            expires: "2026-10-19T18:00:00-04:00".into(),
            certainty: "Likely".into(),
            urgency: "Immediate".into(),
            description: "Flash flood warning".into(),
            instruction: "Move to higher ground".into(),
        }
    }

    fn service(forecaster: StubForecaster) -> WeatherService {
        WeatherService::new(
            Box::new(StubGeocoder(Some(Coordinates::new(40.0, -75.0)))),
            Box::new(forecaster),
        )
    }

    #[tokio::test]
    async fn get_coordinates_delegates_to_geocoder() {
        let svc = service(StubForecaster::default());
        let coords = svc.get_coordinates("Philadelphia").await.unwrap();
        assert_eq!(coords, Coordinates::new(40.0, -75.0));

        let svc = WeatherService::new(
            Box::new(StubGeocoder(None)),
            Box::new(StubForecaster::default()),
        );
        let err = svc.get_coordinates("Atlantis").await.unwrap_err();
        assert!(matches!(WeatherError::find_in(&err), Some(WeatherError::NotFound { .. })));
    }

    #[tokio::test]
    async fn returns_forecast_and_alerts_together() {
        let svc = service(StubForecaster {
            forecast: Some(sample_forecast()),
            alerts: Some(vec![sample_alert()]),
            ..Default::default()
        });

        let (forecast, alerts) =
            svc.get_forecast_and_alerts(Coordinates::new(40.0, -75.0)).await.unwrap();

        assert_eq!(forecast, sample_forecast());
        assert_eq!(alerts, vec![sample_alert()]);
    }

    #[tokio::test]
    async fn forecast_failure_skips_alerts() {
        let alert_calls = Arc::new(AtomicUsize::new(0));
        let svc = service(StubForecaster {
            forecast: None,
            alerts: Some(vec![]),
            alert_calls: alert_calls.clone(),
            ..Default::default()
        });

        let err = svc.get_forecast_and_alerts(Coordinates::new(40.0, -75.0)).await.unwrap_err();

        assert_eq!(err.to_string(), "unable to get forecast information");
        assert!(matches!(WeatherError::find_in(&err), Some(WeatherError::NoData)));
        assert_eq!(alert_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn alerts_failure_discards_forecast() {
        let forecast_calls = Arc::new(AtomicUsize::new(0));
        let svc = service(StubForecaster {
            forecast: Some(sample_forecast()),
            alerts: None,
            forecast_calls: forecast_calls.clone(),
            ..Default::default()
        });

        let err = svc.get_forecast_and_alerts(Coordinates::new(40.0, -75.0)).await.unwrap_err();

        assert_eq!(err.to_string(), "unable to get alerts information");
        assert!(format!("{err:#}").contains("alerts endpoint unavailable"));
        assert_eq!(forecast_calls.load(Ordering::SeqCst), 1);
    }
}
