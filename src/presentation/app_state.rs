// Application state for HTTP handlers
use std::sync::Arc;

use crate::application::weather_api::WeatherApi;
use crate::infrastructure::config::InputDefaults;

#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn WeatherApi>,
    pub defaults: InputDefaults,
}
