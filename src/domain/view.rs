// View models produced by the render functions and written to a page surface
use super::elements;

/// One labelled value under a card's headline metric.
#[derive(Debug, Clone, PartialEq)]
pub struct CardDetail {
    pub label: &'static str,
    pub value: String,
    pub suffix: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricCard {
    pub title: &'static str,
    pub value: String,
    pub unit: &'static str,
    pub caption: Option<String>,
    pub details: Vec<CardDetail>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryView {
    pub cards: Vec<MetricCard>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordRow {
    pub id: String,
    pub time: String,
    pub temperature: String,
    pub windspeed: String,
    pub direction: String,
    pub weathercode: String,
    pub daylight: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DataTableView {
    pub total_records: String,
    pub showing_records: String,
    pub rows: Vec<RecordRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureView {
    pub average: String,
    pub min: String,
    pub max: String,
    pub range: String,
    pub rate_of_change: String,
    pub delta_per_hour: String,
    pub last_updated: String,
}

impl TemperatureView {
    pub fn fields(&self) -> [(&'static str, &str); 7] {
        [
            (elements::AVG_TEMP, self.average.as_str()),
            (elements::TEMP_MIN, self.min.as_str()),
            (elements::TEMP_MAX, self.max.as_str()),
            (elements::TEMP_RANGE, self.range.as_str()),
            (elements::RATE_CHANGE, self.rate_of_change.as_str()),
            (elements::DELTA, self.delta_per_hour.as_str()),
            (elements::LAST_UPDATED, self.last_updated.as_str()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindView {
    pub average_speed: String,
    pub peak_speed: String,
    pub dominant_direction: String,
    pub direction_label: String,
    pub direction_variability: String,
}

impl WindView {
    pub fn fields(&self) -> [(&'static str, &str); 5] {
        [
            (elements::AVG_WIND, self.average_speed.as_str()),
            (elements::PEAK_WIND, self.peak_speed.as_str()),
            (elements::WIND_DIRECTION, self.dominant_direction.as_str()),
            (elements::DIRECTION_TEXT, self.direction_label.as_str()),
            (elements::WIND_VARIABILITY, self.direction_variability.as_str()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalmPeriodsView {
    pub calm_count: String,
    pub total_periods: String,
    pub calm_percentage: String,
}

impl CalmPeriodsView {
    pub fn fields(&self) -> [(&'static str, &str); 3] {
        [
            (elements::CALM_COUNT, self.calm_count.as_str()),
            (elements::TOTAL_PERIODS, self.total_periods.as_str()),
            (elements::CALM_PERCENTAGE, self.calm_percentage.as_str()),
        ]
    }
}
