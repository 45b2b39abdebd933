// Application layer - Page controllers and the collaborators they are injected with
pub mod data_controller;
pub mod page;
pub mod page_surface;
pub mod summary_controller;
pub mod temperature_controller;
pub mod weather_api;
pub mod wind_controller;

#[cfg(test)]
pub mod testing;
