// Summary page - one request, six metric cards
use async_trait::async_trait;

use crate::application::page::PageController;
use crate::application::page_surface::{PageSurface, read_input};
use crate::application::weather_api::{WeatherApi, fetch_as};
use crate::domain::elements::{PERIOD_INPUT, SUMMARY_GRID};
use crate::domain::request::{Endpoint, Period};
use crate::domain::summary::{SummaryResponse, render_summary};
use crate::error::Result;

#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryController;

#[async_trait]
impl PageController for SummaryController {
    fn name(&self) -> &'static str {
        "summary"
    }

    fn failure_message(&self) -> &'static str {
        "Failed to load weather summary. Please check if the API is running."
    }

    async fn load(&self, api: &dyn WeatherApi, surface: &mut dyn PageSurface) -> Result<()> {
        let period = Period::parse(PERIOD_INPUT, &read_input(surface, PERIOD_INPUT)?)?;

        let response: SummaryResponse = fetch_as(api, Endpoint::Summary(period)).await?;
        let view = render_summary(&response.summary);

        surface.set_cards(SUMMARY_GRID, view.cards);
        Ok(())
    }
}
