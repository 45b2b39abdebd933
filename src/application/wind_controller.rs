// Wind page - four concurrent requests, then a best-effort calm-periods follow-up
use async_trait::async_trait;

use crate::application::page::PageController;
use crate::application::page_surface::{PageSurface, read_input};
use crate::application::weather_api::{WeatherApi, fetch_as};
use crate::domain::elements::{CALM_THRESHOLD_INPUT, WIND_PERIOD_INPUT};
use crate::domain::request::{CalmThreshold, Endpoint, Period};
use crate::domain::wind::{
    AverageWindSpeedResponse, CalmPeriodsResponse, DirectionVariabilityResponse,
    DominantDirectionResponse, PeakWindSpeedResponse, WindMetrics, render_calm_periods, render_wind,
};
use crate::error::{DashboardError, Result};

#[derive(Debug, Clone, Copy, Default)]
pub struct WindController;

impl WindController {
    /// Runs only after the primary batch has been written.
    async fn load_calm_periods(
        &self,
        api: &dyn WeatherApi,
        surface: &mut dyn PageSurface,
        period: Period,
    ) -> Result<()> {
        let threshold = CalmThreshold::parse(
            CALM_THRESHOLD_INPUT,
            &read_input(surface, CALM_THRESHOLD_INPUT)?,
        )?;

        let response: CalmPeriodsResponse =
            fetch_as(api, Endpoint::WindCalmPeriods(period, threshold)).await?;
        let view = render_calm_periods(&response.result);
        for (id, text) in view.fields() {
            surface.set_text(id, text);
        }
        Ok(())
    }
}

#[async_trait]
impl PageController for WindController {
    fn name(&self) -> &'static str {
        "wind"
    }

    fn failure_message(&self) -> &'static str {
        "Failed to load wind data. Please check if the API is running."
    }

    async fn load(&self, api: &dyn WeatherApi, surface: &mut dyn PageSurface) -> Result<()> {
        let period = Period::parse(WIND_PERIOD_INPUT, &read_input(surface, WIND_PERIOD_INPUT)?)?;

        let (average, peak, direction, variability) = futures::try_join!(
            fetch_as::<AverageWindSpeedResponse>(api, Endpoint::WindAverageSpeed(period)),
            fetch_as::<PeakWindSpeedResponse>(api, Endpoint::WindPeakSpeed(period)),
            fetch_as::<DominantDirectionResponse>(api, Endpoint::WindDominantDirection(period)),
            fetch_as::<DirectionVariabilityResponse>(api, Endpoint::WindDirectionVariability(period))
        )?;

        let metrics = WindMetrics::from_parts(average, peak, direction, variability);
        let view = render_wind(&metrics);
        for (id, text) in view.fields() {
            surface.set_text(id, text);
        }

        if let Err(e) = self.load_calm_periods(api, surface, period).await {
            let e = DashboardError::partial("calm-periods", e);
            tracing::warn!(error = %e, "Failed to load calm periods");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::page::{LoadOutcome, init_page};
    use crate::application::testing::{FakeSurface, FakeWeatherApi};
    use crate::domain::elements::{
        AVG_WIND, CALM_COUNT, CALM_PERCENTAGE, DIRECTION_TEXT, PEAK_WIND, TOTAL_PERIODS,
        WIND_DIRECTION, WIND_VARIABILITY,
    };
    use serde_json::json;
    use std::time::Duration;

    const AVERAGE: &str = "/wind/average-speed?period=7";
    const PEAK: &str = "/wind/peak-speed?period=7";
    const DIRECTION: &str = "/wind/dominant-direction?period=7";
    const VARIABILITY: &str = "/wind/direction-variability?period=7";
    const CALM: &str = "/wind/calm-periods?period=7&threshold=5";

    fn backend() -> FakeWeatherApi {
        FakeWeatherApi::new()
            .respond(AVERAGE, json!({"period": 7, "average_windspeed": 9.4, "unit": "km/h"}))
            .respond(PEAK, json!({"period": 7, "peak_windspeed": 27.0, "unit": "km/h"}))
            .respond(DIRECTION, json!({"period": 7, "dominant_direction": 292.5, "unit": "degrees"}))
            .respond(VARIABILITY, json!({"period": 7, "direction_variability": 33.1}))
            .respond(
                CALM,
                json!({"period": 7, "threshold": 5.0, "result": {"calm_periods": 3, "total_periods": 20, "calm_percentage": 15}}),
            )
    }

    fn surface() -> FakeSurface {
        FakeSurface::new()
            .with_input(WIND_PERIOD_INPUT, "7")
            .with_input(CALM_THRESHOLD_INPUT, "5")
    }

    #[tokio::test]
    async fn test_primary_batch_then_calm_periods() {
        let api = backend();
        let mut surface = surface();

        let outcome = init_page(&WindController, &api, &mut surface).await;

        assert_eq!(outcome, LoadOutcome::Succeeded);
        assert_eq!(surface.text(AVG_WIND), Some("9.4"));
        assert_eq!(surface.text(PEAK_WIND), Some("27"));
        assert_eq!(surface.text(WIND_DIRECTION), Some("292.5"));
        assert_eq!(surface.text(DIRECTION_TEXT), Some("WNW"));
        assert_eq!(surface.text(WIND_VARIABILITY), Some("33.1"));
        assert_eq!(surface.text(CALM_COUNT), Some("3"));
        assert_eq!(surface.text(TOTAL_PERIODS), Some("20"));
        assert_eq!(surface.text(CALM_PERCENTAGE), Some("15"));

        // The follow-up is issued strictly after the batch.
        assert_eq!(api.calls().last().map(String::as_str), Some(CALM));
    }

    #[tokio::test]
    async fn test_batch_requests_are_in_flight_together() {
        let api = backend().gated(&[AVERAGE, PEAK, DIRECTION, VARIABILITY]);
        let mut surface = surface();

        let outcome = tokio::time::timeout(
            Duration::from_secs(5),
            init_page(&WindController, &api, &mut surface),
        )
        .await
        .expect("batch requests were not dispatched concurrently");

        assert_eq!(outcome, LoadOutcome::Succeeded);
    }

    #[tokio::test]
    async fn test_calm_periods_failure_is_not_fatal() {
        let api = backend().fail(CALM, 500);
        let mut surface = surface().with_text(CALM_COUNT, "--");

        let outcome = init_page(&WindController, &api, &mut surface).await;

        assert_eq!(outcome, LoadOutcome::Succeeded);
        assert_eq!(surface.text(AVG_WIND), Some("9.4"));
        assert_eq!(surface.text(DIRECTION_TEXT), Some("WNW"));
        assert_eq!(surface.text(CALM_COUNT), Some("--"));
        assert!(surface.text(TOTAL_PERIODS).is_none());
        assert!(surface.error.is_none());
    }

    #[tokio::test]
    async fn test_invalid_threshold_skips_follow_up() {
        let api = backend();
        let mut surface = surface().with_input(CALM_THRESHOLD_INPUT, "-3");

        let outcome = init_page(&WindController, &api, &mut surface).await;

        assert_eq!(outcome, LoadOutcome::Succeeded);
        assert!(!api.calls().iter().any(|call| call.starts_with("/wind/calm-periods")));
        assert!(surface.text(CALM_COUNT).is_none());
    }

    #[tokio::test]
    async fn test_batch_failure_skips_follow_up() {
        let api = backend().fail(PEAK, 502);
        let mut surface = surface();

        let outcome = init_page(&WindController, &api, &mut surface).await;

        assert_eq!(outcome, LoadOutcome::Failed);
        assert!(surface.text(AVG_WIND).is_none());
        assert!(!api.calls().contains(&CALM.to_string()));
        assert_eq!(
            surface.error.as_deref(),
            Some("Failed to load wind data. Please check if the API is running.")
        );
    }
}
