// In-memory page document rendered once a controller has run
use std::collections::HashMap;

use crate::application::page_surface::PageSurface;
use crate::domain::format::PLACEHOLDER;
use crate::domain::view::{MetricCard, RecordRow};

#[derive(Debug, Clone, Default)]
pub struct PageDocument {
    inputs: HashMap<String, String>,
    texts: HashMap<String, String>,
    cards: HashMap<String, Vec<MetricCard>>,
    rows: HashMap<String, Vec<RecordRow>>,
    loading: bool,
    error: Option<String>,
}

impl PageDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(mut self, id: &str, value: impl Into<String>) -> Self {
        self.inputs.insert(id.to_string(), value.into());
        self
    }

    pub fn input(&self, id: &str) -> &str {
        self.inputs.get(id).map(String::as_str).unwrap_or("")
    }

    /// Text of an output element; elements never written show the placeholder.
    pub fn text(&self, id: &str) -> &str {
        self.texts.get(id).map(String::as_str).unwrap_or(PLACEHOLDER)
    }

    pub fn cards(&self, id: &str) -> &[MetricCard] {
        self.cards.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn rows(&self, id: &str) -> &[RecordRow] {
        self.rows.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl PageSurface for PageDocument {
    fn input_value(&self, id: &str) -> Option<String> {
        self.inputs.get(id).cloned()
    }

    fn set_loading(&mut self, visible: bool) {
        self.loading = visible;
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
