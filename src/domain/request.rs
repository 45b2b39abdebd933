// Backend request model
//
// Every time window is a `Period` internally. The backend names it `hours` on
// two temperature endpoints; that translation happens only in `Endpoint::query`.
use std::fmt;

use super::format::format_number;
use crate::error::{DashboardError, Result};

/// Analysis window in hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period(u32);

impl Period {
    pub fn new(hours: u32) -> Option<Self> {
        (hours >= 1).then_some(Self(hours))
    }

    pub fn parse(input: &str, raw: &str) -> Result<Self> {
        raw.trim()
            .parse::<u32>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| invalid(input, raw))
    }

    pub fn hours(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hours())
    }
}

/// Maximum number of raw records to request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordLimit(u32);

impl RecordLimit {
    pub fn new(limit: u32) -> Option<Self> {
        (limit >= 1).then_some(Self(limit))
    }

    pub fn parse(input: &str, raw: &str) -> Result<Self> {
        raw.trim()
            .parse::<u32>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| invalid(input, raw))
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

/// Wind speed (km/h) below which a period counts as calm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalmThreshold(f64);

impl CalmThreshold {
    pub fn new(kmh: f64) -> Option<Self> {
        (kmh.is_finite() && kmh >= 0.0).then_some(Self(kmh))
    }

    pub fn parse(input: &str, raw: &str) -> Result<Self> {
        raw.trim()
            .parse::<f64>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| invalid(input, raw))
    }

    pub fn kmh(&self) -> f64 {
        self.0
    }
}

fn invalid(input: &str, raw: &str) -> DashboardError {
    DashboardError::InvalidInput {
        input: input.to_string(),
        value: raw.to_string(),
    }
}

/// The backend endpoints the dashboard consumes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Endpoint {
    Summary(Period),
    Data(RecordLimit),
    TemperatureAverage(Period),
    TemperatureRange(Period),
    TemperatureRateOfChange(Period),
    TemperatureDelta(Period),
    WindAverageSpeed(Period),
    WindPeakSpeed(Period),
    WindDominantDirection(Period),
    WindDirectionVariability(Period),
    WindCalmPeriods(Period, CalmThreshold),
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Summary(_) => "/summary",
            Endpoint::Data(_) => "/data",
            Endpoint::TemperatureAverage(_) => "/temperature/average",
            Endpoint::TemperatureRange(_) => "/temperature/range",
            Endpoint::TemperatureRateOfChange(_) => "/temperature/rate-of-change",
            Endpoint::TemperatureDelta(_) => "/temperature/delta",
            Endpoint::WindAverageSpeed(_) => "/wind/average-speed",
            Endpoint::WindPeakSpeed(_) => "/wind/peak-speed",
            Endpoint::WindDominantDirection(_) => "/wind/dominant-direction",
            Endpoint::WindDirectionVariability(_) => "/wind/direction-variability",
            Endpoint::WindCalmPeriods(..) => "/wind/calm-periods",
        }
    }

    /// Query parameters in the names the backend expects.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        match self {
            Endpoint::Data(limit) => vec![("limit", limit.get().to_string())],
            Endpoint::TemperatureRateOfChange(period) | Endpoint::TemperatureDelta(period) => {
                vec![("hours", period.to_string())]
            }
            Endpoint::WindCalmPeriods(period, threshold) => vec![
                ("period", period.to_string()),
                ("threshold", format_number(threshold.kmh())),
            ],
            Endpoint::Summary(period)
            | Endpoint::TemperatureAverage(period)
            | Endpoint::TemperatureRange(period)
            | Endpoint::WindAverageSpeed(period)
            | Endpoint::WindPeakSpeed(period)
            | Endpoint::WindDominantDirection(period)
            | Endpoint::WindDirectionVariability(period) => vec![("period", period.to_string())],
        }
    }

    pub fn path_and_query(&self) -> String {
        let query = self
            .query()
            .into_iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(&value)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", self.path(), query)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path_and_query())
    }
}
