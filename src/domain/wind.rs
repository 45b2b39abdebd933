// Wind analysis responses and rendering
use serde::Deserialize;

use super::compass::compass_label;
use super::format::{PLACEHOLDER, format_optional};
use super::view::{CalmPeriodsView, WindView};

#[derive(Debug, Clone, Deserialize)]
pub struct AverageWindSpeedResponse {
    #[serde(default)]
    pub average_windspeed: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PeakWindSpeedResponse {
    #[serde(default)]
    pub peak_windspeed: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DominantDirectionResponse {
    #[serde(default)]
    pub dominant_direction: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DirectionVariabilityResponse {
    #[serde(default)]
    pub direction_variability: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CalmPeriods {
    #[serde(default)]
    pub calm_periods: Option<f64>,
    #[serde(default)]
    pub total_periods: Option<f64>,
    #[serde(default)]
    pub calm_percentage: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CalmPeriodsResponse {
    pub result: CalmPeriods,
}

/// The four primary wind metrics, fetched together for one period.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WindMetrics {
    pub average_speed: Option<f64>,
    pub peak_speed: Option<f64>,
    pub dominant_direction: Option<f64>,
    pub direction_variability: Option<f64>,
}

impl WindMetrics {
    pub fn from_parts(
        average: AverageWindSpeedResponse,
        peak: PeakWindSpeedResponse,
        direction: DominantDirectionResponse,
        variability: DirectionVariabilityResponse,
    ) -> Self {
        Self {
            average_speed: average.average_windspeed,
            peak_speed: peak.peak_windspeed,
            dominant_direction: direction.dominant_direction,
            direction_variability: variability.direction_variability,
        }
    }
}

pub fn render_wind(metrics: &WindMetrics) -> WindView {
    WindView {
        average_speed: format_optional(metrics.average_speed),
        peak_speed: format_optional(metrics.peak_speed),
        dominant_direction: format_optional(metrics.dominant_direction),
        direction_label: metrics
            .dominant_direction
            .map(compass_label)
            .unwrap_or(PLACEHOLDER)
            .to_string(),
        direction_variability: format_optional(metrics.direction_variability),
    }
}

pub fn render_calm_periods(calm: &CalmPeriods) -> CalmPeriodsView {
    CalmPeriodsView {
        calm_count: format_optional(calm.calm_periods),
        total_periods: format_optional(calm.total_periods),
        calm_percentage: format_optional(calm.calm_percentage),
    }
}
