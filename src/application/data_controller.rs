// Raw data page - one request, a rebuilt record table
use async_trait::async_trait;

use crate::application::page::PageController;
use crate::application::page_surface::{PageSurface, read_input};
use crate::application::weather_api::{WeatherApi, fetch_as};
use crate::domain::elements::{DATA_LIMIT_INPUT, DATA_TBODY, SHOWING_RECORDS, TOTAL_RECORDS};
use crate::domain::records::{DataResponse, render_data_table};
use crate::domain::request::{Endpoint, RecordLimit};
use crate::error::Result;

#[derive(Debug, Clone, Copy, Default)]
pub struct DataController;

#[async_trait]
impl PageController for DataController {
    fn name(&self) -> &'static str {
        "data"
    }

    fn failure_message(&self) -> &'static str {
        "Failed to load data. Please check if the API is running."
    }

    async fn load(&self, api: &dyn WeatherApi, surface: &mut dyn PageSurface) -> Result<()> {
        let limit = RecordLimit::parse(DATA_LIMIT_INPUT, &read_input(surface, DATA_LIMIT_INPUT)?)?;

        let response: DataResponse = fetch_as(api, Endpoint::Data(limit)).await?;
        let view = render_data_table(&response);

        surface.set_text(TOTAL_RECORDS, &view.total_records);
        surface.set_text(SHOWING_RECORDS, &view.showing_records);
        surface.set_rows(DATA_TBODY, view.rows);
        Ok(())
    }
}
