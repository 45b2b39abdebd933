// Element identifiers shared by the page templates and the controllers

pub const LOADING: &str = "loading";
pub const ERROR: &str = "error";

// Summary page
pub const PERIOD_INPUT: &str = "period";
pub const SUMMARY_GRID: &str = "summary-grid";

// Raw data page
pub const DATA_LIMIT_INPUT: &str = "data-limit";
pub const TOTAL_RECORDS: &str = "total-records";
pub const SHOWING_RECORDS: &str = "showing-records";
pub const DATA_TBODY: &str = "data-tbody";

// Temperature page
pub const TEMP_PERIOD_INPUT: &str = "temp-period";
pub const ANALYSIS_PERIOD: &str = "analysis-period";
pub const AVG_TEMP: &str = "avg-temp";
pub const TEMP_MIN: &str = "temp-min";
pub const TEMP_MAX: &str = "temp-max";
pub const TEMP_RANGE: &str = "temp-range-val";
pub const RATE_CHANGE: &str = "rate-change";
pub const DELTA: &str = "delta";
pub const LAST_UPDATED: &str = "last-updated";

// Wind page
pub const WIND_PERIOD_INPUT: &str = "wind-period";
pub const CALM_THRESHOLD_INPUT: &str = "calm-threshold";
pub const AVG_WIND: &str = "avg-wind";
pub const PEAK_WIND: &str = "peak-wind";
pub const WIND_DIRECTION: &str = "wind-direction";
pub const DIRECTION_TEXT: &str = "direction-text";
pub const WIND_VARIABILITY: &str = "wind-variability";
pub const CALM_COUNT: &str = "calm-count";
pub const TOTAL_PERIODS: &str = "total-periods";
pub const CALM_PERCENTAGE: &str = "calm-percentage";
