// Raw weather records and table rendering
use serde::{Deserialize, Deserializer};

use super::compass::compass_label;
use super::format::{PLACEHOLDER, day_night_label, format_date_time, format_optional};
use super::view::{DataTableView, RecordRow};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub id: Option<f64>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub windspeed: Option<f64>,
    #[serde(default)]
    pub winddirection: Option<f64>,
    #[serde(default)]
    pub weathercode: Option<f64>,
    #[serde(default, deserialize_with = "flag")]
    pub is_day: bool,
    /// Sampling interval in seconds.
    #[serde(default)]
    #[allow(dead_code)]
    pub interval: Option<f64>,
    /// When the record was stored by the collector.
    #[serde(default)]
    #[allow(dead_code)]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataResponse {
    #[serde(default)]
    pub count: Option<f64>,
    #[serde(default)]
    pub data: Vec<RawRecord>,
}

// The collector stores is_day as 0/1; accept booleans as well.
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Number(f64),
    }

    Ok(match Option::<Flag>::deserialize(deserializer)? {
        Some(Flag::Bool(b)) => b,
        Some(Flag::Number(n)) => n != 0.0,
        None => false,
    })
}

pub fn render_record(record: &RawRecord) -> RecordRow {
    let direction = match record.winddirection {
        Some(degrees) => format!("{}° ({})", format_optional(Some(degrees)), compass_label(degrees)),
        None => PLACEHOLDER.to_string(),
    };

    RecordRow {
        id: format_optional(record.id),
        time: record
            .time
            .as_deref()
            .map(format_date_time)
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
        temperature: format_optional(record.temperature),
        windspeed: format_optional(record.windspeed),
        direction,
        weathercode: format_optional(record.weathercode),
        daylight: day_night_label(record.is_day).to_string(),
    }
}

/// The showing count is always the number of records returned, not the limit asked for.
pub fn render_data_table(response: &DataResponse) -> DataTableView {
    DataTableView {
        total_records: format_optional(response.count),
        showing_records: response.data.len().to_string(),
        rows: response.data.iter().map(render_record).collect(),
    }
}
