// Page surface trait - the element-addressed display a controller reads from and writes to
use crate::domain::view::{MetricCard, RecordRow};
use crate::error::{DashboardError, Result};

pub trait PageSurface: Send {
    /// Current value of an input element, if the page has one with this id.
    fn input_value(&self, id: &str) -> Option<String>;

    fn set_loading(&mut self, visible: bool);

    fn clear_error(&mut self);

    fn show_error(&mut self, message: &str);

    fn set_text(&mut self, id: &str, text: &str);

    /// Replace the whole content of a card container.
    fn set_cards(&mut self, id: &str, cards: Vec<MetricCard>);

    /// Replace every row of a table body.
    fn set_rows(&mut self, id: &str, rows: Vec<RecordRow>);
}

/// Read an input once; a page without the input is treated as invalid input.
pub fn read_input(surface: &dyn PageSurface, id: &str) -> Result<String> {
    surface
        .input_value(id)
        .ok_or_else(|| DashboardError::InvalidInput {
            input: id.to_string(),
            value: String::new(),
        })
}
