// Domain layer - Response shapes, request model and pure view rendering
pub mod compass;
pub mod elements;
pub mod format;
pub mod records;
pub mod request;
pub mod summary;
pub mod temperature;
pub mod view;
pub mod wind;
