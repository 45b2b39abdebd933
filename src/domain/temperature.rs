// Temperature analysis responses and rendering
use chrono::{DateTime, Local};
use serde::Deserialize;

use super::format::{format_optional, format_updated_at};
use super::view::TemperatureView;

#[derive(Debug, Clone, Deserialize)]
pub struct AverageTemperatureResponse {
    #[serde(default)]
    pub average_temperature: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TemperatureSpan {
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    #[serde(default)]
    pub range: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TemperatureRangeResponse {
    #[serde(default)]
    pub temperature_range: TemperatureSpan,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RateOfChangeResponse {
    #[serde(default)]
    pub avg_rate_of_change: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TemperatureDeltaResponse {
    #[serde(default)]
    pub delta_per_hour: Option<f64>,
}

/// Four partial views of the same window, combined by position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemperatureMetrics {
    pub average: Option<f64>,
    pub range: TemperatureSpan,
    pub rate_of_change: Option<f64>,
    pub delta_per_hour: Option<f64>,
}

impl TemperatureMetrics {
    pub fn from_parts(
        average: AverageTemperatureResponse,
        range: TemperatureRangeResponse,
        rate: RateOfChangeResponse,
        delta: TemperatureDeltaResponse,
    ) -> Self {
        Self {
            average: average.average_temperature,
            range: range.temperature_range,
            rate_of_change: rate.avg_rate_of_change,
            delta_per_hour: delta.delta_per_hour,
        }
    }
}

pub fn render_temperature(metrics: &TemperatureMetrics, updated_at: DateTime<Local>) -> TemperatureView {
    TemperatureView {
        average: format_optional(metrics.average),
        min: format_optional(metrics.range.min),
        max: format_optional(metrics.range.max),
        range: format_optional(metrics.range.range),
        rate_of_change: format_optional(metrics.rate_of_change),
        delta_per_hour: format_optional(metrics.delta_per_hour),
        last_updated: format_updated_at(updated_at),
    }
}
