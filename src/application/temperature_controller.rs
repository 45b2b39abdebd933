// Temperature page - four concurrent requests applied as one batch
use async_trait::async_trait;
use chrono::Local;

use crate::application::page::PageController;
use crate::application::page_surface::{PageSurface, read_input};
use crate::application::weather_api::{WeatherApi, fetch_as};
use crate::domain::elements::{ANALYSIS_PERIOD, TEMP_PERIOD_INPUT};
use crate::domain::request::{Endpoint, Period};
use crate::domain::temperature::{
    AverageTemperatureResponse, RateOfChangeResponse, TemperatureDeltaResponse, TemperatureMetrics,
    TemperatureRangeResponse, render_temperature,
};
use crate::error::Result;

#[derive(Debug, Clone, Copy, Default)]
pub struct TemperatureController;

#[async_trait]
impl PageController for TemperatureController {
    fn name(&self) -> &'static str {
        "temperature"
    }

    fn failure_message(&self) -> &'static str {
        "Failed to load temperature data. Please check if the API is running."
    }

    async fn load(&self, api: &dyn WeatherApi, surface: &mut dyn PageSurface) -> Result<()> {
        // Read once; all four requests share it.
        let period = Period::parse(TEMP_PERIOD_INPUT, &read_input(surface, TEMP_PERIOD_INPUT)?)?;
        surface.set_text(ANALYSIS_PERIOD, &period.to_string());

        let (average, range, rate, delta) = futures::try_join!(
            fetch_as::<AverageTemperatureResponse>(api, Endpoint::TemperatureAverage(period)),
            fetch_as::<TemperatureRangeResponse>(api, Endpoint::TemperatureRange(period)),
            fetch_as::<RateOfChangeResponse>(api, Endpoint::TemperatureRateOfChange(period)),
            fetch_as::<TemperatureDeltaResponse>(api, Endpoint::TemperatureDelta(period))
        )?;

        let metrics = TemperatureMetrics::from_parts(average, range, rate, delta);
        let view = render_temperature(&metrics, Local::now());
        for (id, text) in view.fields() {
            surface.set_text(id, text);
        }
        Ok(())
    }
}
