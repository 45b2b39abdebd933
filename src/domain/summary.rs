// Weather summary response and card rendering
use serde::Deserialize;

use super::compass::compass_label;
use super::format::{PLACEHOLDER, format_optional};
use super::view::{CardDetail, MetricCard, SummaryView};
use super::wind::CalmPeriods;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TemperatureBounds {
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
}

/// Aggregated report for one period. Every field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "SummaryFields")]
pub struct SummaryReport {
    pub average_temperature: Option<f64>,
    pub temperature_range: Option<TemperatureBounds>,
    pub average_windspeed: Option<f64>,
    pub peak_windspeed: Option<f64>,
    pub dominant_wind_direction: Option<f64>,
    pub calm_periods: Option<CalmPeriods>,
    pub wind_variability: Option<f64>,
    pub data_points: Option<f64>,
}

// Older backends send the short names; when both appear the long one wins.
#[derive(Deserialize)]
struct SummaryFields {
    #[serde(default)]
    average_temperature: Option<f64>,
    #[serde(default)]
    avg_temperature: Option<f64>,
    #[serde(default)]
    temperature_range: Option<TemperatureBounds>,
    #[serde(default)]
    temp_range: Option<TemperatureBounds>,
    #[serde(default)]
    average_windspeed: Option<f64>,
    #[serde(default)]
    avg_windspeed: Option<f64>,
    #[serde(default)]
    peak_windspeed: Option<f64>,
    #[serde(default)]
    dominant_wind_direction: Option<f64>,
    #[serde(default)]
    calm_periods: Option<CalmPeriods>,
    #[serde(default)]
    wind_variability: Option<f64>,
    #[serde(default)]
    data_points: Option<f64>,
}

impl From<SummaryFields> for SummaryReport {
    fn from(fields: SummaryFields) -> Self {
        Self {
            average_temperature: fields.average_temperature.or(fields.avg_temperature),
            temperature_range: fields.temperature_range.or(fields.temp_range),
            average_windspeed: fields.average_windspeed.or(fields.avg_windspeed),
            peak_windspeed: fields.peak_windspeed,
            dominant_wind_direction: fields.dominant_wind_direction,
            calm_periods: fields.calm_periods,
            wind_variability: fields.wind_variability,
            data_points: fields.data_points,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SummaryResponse {
    #[serde(default)]
    #[allow(dead_code)]
    pub period: Option<f64>,
    #[serde(default)]
    pub summary: SummaryReport,
}

/// Build the six summary cards.
pub fn render_summary(summary: &SummaryReport) -> SummaryView {
    let range = summary.temperature_range.clone().unwrap_or_default();
    let calm = summary.calm_periods.clone().unwrap_or_default();

    let cards = vec![
        MetricCard {
            title: "Temperature",
            value: format_optional(summary.average_temperature),
            unit: "°C average",
            caption: None,
            details: vec![
                detail("Min", format_optional(range.min), "°C"),
                detail("Max", format_optional(range.max), "°C"),
            ],
        },
        MetricCard {
            title: "Wind Speed",
            value: format_optional(summary.average_windspeed),
            unit: "km/h average",
            caption: None,
            details: vec![detail("Peak", format_optional(summary.peak_windspeed), " km/h")],
        },
        MetricCard {
            title: "Wind Direction",
            value: format_optional(summary.dominant_wind_direction),
            unit: "degrees",
            caption: Some(
                summary
                    .dominant_wind_direction
                    .map(compass_label)
                    .unwrap_or(PLACEHOLDER)
                    .to_string(),
            ),
            details: Vec::new(),
        },
        MetricCard {
            title: "Calm Periods",
            value: format_optional(calm.calm_percentage),
            unit: "% calm time",
            caption: None,
            details: vec![
                detail("Calm", format_optional(calm.calm_periods), ""),
                detail("Total", format_optional(calm.total_periods), ""),
            ],
        },
        MetricCard {
            title: "Wind Variability",
            value: format_optional(summary.wind_variability),
            unit: "std deviation",
            caption: None,
            details: Vec::new(),
        },
        MetricCard {
            title: "Data Points",
            value: format_optional(summary.data_points),
            unit: "analyzed",
            caption: None,
            details: Vec::new(),
        },
    ];

    SummaryView { cards }
}

fn detail(label: &'static str, value: String, suffix: &'static str) -> CardDetail {
    CardDetail {
        label,
        value,
        suffix,
    }
}
