// Test doubles for the controller collaborators
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Barrier;

use crate::application::page_surface::PageSurface;
use crate::application::weather_api::WeatherApi;
use crate::domain::request::Endpoint;
use crate::domain::view::{MetricCard, RecordRow};
use crate::error::{DashboardError, Result};

enum Reply {
    Json(Value),
    Status(u16),
}

/// Canned backend keyed by path and query. Unknown paths answer 404.
#[derive(Default)]
pub struct FakeWeatherApi {
    replies: HashMap<String, Reply>,
    calls: Mutex<Vec<String>>,
    gate: Option<(Arc<Barrier>, Vec<String>)>,
}

impl FakeWeatherApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, path: &str, body: Value) -> Self {
        self.replies.insert(path.to_string(), Reply::Json(body));
        self
    }

    pub fn fail(mut self, path: &str, status: u16) -> Self {
        self.replies.insert(path.to_string(), Reply::Status(status));
        self
    }

    /// Requests to these paths block until every one of them is in flight.
    pub fn gated(mut self, paths: &[&str]) -> Self {
        let barrier = Arc::new(Barrier::new(paths.len()));
        self.gate = Some((barrier, paths.iter().map(|p| p.to_string()).collect()));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl WeatherApi for FakeWeatherApi {
    async fn fetch(&self, endpoint: &Endpoint) -> Result<Value> {
        let path = endpoint.path_and_query();
        self.calls.lock().unwrap().push(path.clone());

        if let Some((barrier, paths)) = &self.gate {
            if paths.contains(&path) {
                barrier.wait().await;
            }
        }

        match self.replies.get(&path) {
            Some(Reply::Json(body)) => Ok(body.clone()),
            Some(Reply::Status(status)) => Err(DashboardError::Status {
                path,
                status: *status,
            }),
            None => Err(DashboardError::Status { path, status: 404 }),
        }
    }
}

/// Records everything a controller writes.
#[derive(Debug, Default)]
pub struct FakeSurface {
    pub inputs: HashMap<String, String>,
    pub texts: HashMap<String, String>,
    pub cards: HashMap<String, Vec<MetricCard>>,
    pub rows: HashMap<String, Vec<RecordRow>>,
    pub loading_history: Vec<bool>,
    pub error: Option<String>,
}

impl FakeSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(mut self, id: &str, value: &str) -> Self {
        self.inputs.insert(id.to_string(), value.to_string());
        self
    }

    pub fn with_text(mut self, id: &str, text: &str) -> Self {
        self.texts.insert(id.to_string(), text.to_string());
        self
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.texts.get(id).map(String::as_str)
    }
}

impl PageSurface for FakeSurface {
    fn input_value(&self, id: &str) -> Option<String> {
        self.inputs.get(id).cloned()
    }

    fn set_loading(&mut self, visible: bool) {
        self.loading_history.push(visible);
    }

    fn clear_error(&mut self) {
        self.error = None;
    }

    fn show_error(&mut self, message: &str) {
        self.error = Some(message.to_string());
    }

    fn set_text(&mut self, id: &str, text: &str) {
        self.texts.insert(id.to_string(), text.to_string());
    }

    fn set_cards(&mut self, id: &str, cards: Vec<MetricCard>) {
        self.cards.insert(id.to_string(), cards);
    }

    fn set_rows(&mut self, id: &str, rows: Vec<RecordRow>) {
        self.rows.insert(id.to_string(), rows);
    }
}
