// Presentation layer - Server-rendered pages
pub mod app_state;
pub mod document;
pub mod handlers;
pub mod router;
pub mod templates;
