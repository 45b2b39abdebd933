// Page templates - maud layouts for the four dashboard pages
use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::domain::elements::*;
use crate::domain::view::{MetricCard, RecordRow};
use crate::presentation::document::PageDocument;

const PERIOD_OPTIONS: [(u32, &str); 7] = [
    (1, "Last hour"),
    (6, "Last 6 hours"),
    (12, "Last 12 hours"),
    (24, "Last 24 hours"),
    (48, "Last 2 days"),
    (72, "Last 3 days"),
    (168, "Last week"),
];

const STYLES: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0 auto; max-width: 1100px; padding: 1rem; }
nav a { margin-right: 1rem; }
nav a.active { font-weight: bold; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 1rem; }
.card { border: 1px solid #ddd; border-radius: 8px; padding: 1rem; }
.metric-value { font-size: 2rem; font-weight: 600; }
.error { color: #b00020; }
table { border-collapse: collapse; width: 100%; }
th, td { border-bottom: 1px solid #eee; padding: 0.4rem; text-align: left; }
"#;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum CurrentPage {
    Summary,
    Data,
    Temperature,
    Wind,
}

impl CurrentPage {
    fn href(self) -> &'static str {
        match self {
            CurrentPage::Summary => "/",
            CurrentPage::Data => "/data",
            CurrentPage::Temperature => "/temperature",
            CurrentPage::Wind => "/wind",
        }
    }

    fn label(self) -> &'static str {
        match self {
            CurrentPage::Summary => "Summary",
            CurrentPage::Data => "Raw Data",
            CurrentPage::Temperature => "Temperature",
            CurrentPage::Wind => "Wind",
        }
    }
}

fn base(current: CurrentPage, document: &PageDocument, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Weather Dashboard - " (current.label()) }
                style { (PreEscaped(STYLES)) }
            }
            body {
                header {
                    h1 { "Weather Dashboard" }
                    nav {
                        @for page in [CurrentPage::Summary, CurrentPage::Data, CurrentPage::Temperature, CurrentPage::Wind] {
                            a href=(page.href()) class=[(page == current).then_some("active")] { (page.label()) }
                        }
                    }
                }

                div id=(LOADING) hidden[!document.is_loading()] { "Loading..." }
                div id=(ERROR) class="error" hidden[document.error().is_none()] {
                    (document.error().unwrap_or_default())
                }

                main { (content) }
            }
        }
    }
}

/// Period selector; a value outside the preset list is kept as its own option.
fn period_select(id: &str, current: &str) -> Markup {
    let is_preset = PERIOD_OPTIONS.iter().any(|(hours, _)| hours.to_string() == current);
    html! {
        label for=(id) { "Period " }
        select id=(id) name=(id) {
            @if !is_preset && !current.is_empty() {
                option value=(current) selected { (current) " hours" }
            }
            @for (hours, label) in PERIOD_OPTIONS {
                option value=(hours) selected[hours.to_string() == current] { (label) }
            }
        }
    }
}

fn field(document: &PageDocument, id: &str) -> Markup {
    html! {
        span id=(id) { (document.text(id)) }
    }
}

fn metric_card(card: &MetricCard) -> Markup {
    html! {
        div class="card" {
            h3 { (card.title) }
            div class="metric-value" { (card.value) }
            p class="metric-unit" { (card.unit) }
            @if let Some(caption) = &card.caption {
                p class="direction-text" { (caption) }
            }
            @if !card.details.is_empty() {
                div class="metric-detail" {
                    @for detail in &card.details {
                        p { (detail.label) ": " span { (detail.value) (detail.suffix) } }
                    }
                }
            }
        }
    }
}

fn record_row(row: &RecordRow) -> Markup {
    html! {
        tr {
            td { (row.id) }
            td { (row.time) }
            td { (row.temperature) }
            td { (row.windspeed) }
            td { (row.direction) }
            td { (row.weathercode) }
            td { (row.daylight) }
        }
    }
}

pub fn summary_page(document: &PageDocument) -> Markup {
    let content = html! {
        form method="get" action="/" {
            (period_select(PERIOD_INPUT, document.input(PERIOD_INPUT)))
            button type="submit" { "Refresh" }
        }
        div id=(SUMMARY_GRID) class="grid" {
            @for card in document.cards(SUMMARY_GRID) {
                (metric_card(card))
            }
        }
    };
    base(CurrentPage::Summary, document, content)
}

pub fn data_page(document: &PageDocument) -> Markup {
    let content = html! {
        form method="get" action="/data" {
            label for=(DATA_LIMIT_INPUT) { "Records " }
            input type="number" min="1" id=(DATA_LIMIT_INPUT) name=(DATA_LIMIT_INPUT)
                value=(document.input(DATA_LIMIT_INPUT));
            button type="submit" { "Load" }
        }
        p {
            "Total records: " (field(document, TOTAL_RECORDS))
            " | Showing: " (field(document, SHOWING_RECORDS))
        }
        table {
            thead {
                tr {
                    th { "ID" }
                    th { "Time" }
                    th { "Temperature (°C)" }
                    th { "Wind Speed (km/h)" }
                    th { "Wind Direction" }
                    th { "Weather Code" }
                    th { "Day/Night" }
                }
            }
            tbody id=(DATA_TBODY) {
                @for row in document.rows(DATA_TBODY) {
                    (record_row(row))
                }
            }
        }
    };
    base(CurrentPage::Data, document, content)
}

pub fn temperature_page(document: &PageDocument) -> Markup {
    let content = html! {
        form method="get" action="/temperature" {
            (period_select(TEMP_PERIOD_INPUT, document.input(TEMP_PERIOD_INPUT)))
            button type="submit" { "Refresh" }
        }
        p { "Analysis period: " (field(document, ANALYSIS_PERIOD)) " hours" }
        div class="grid" {
            div class="card" {
                h3 { "Average" }
                div class="metric-value" { (field(document, AVG_TEMP)) }
                p class="metric-unit" { "°C" }
            }
            div class="card" {
                h3 { "Range" }
                p { "Min: " (field(document, TEMP_MIN)) "°C" }
                p { "Max: " (field(document, TEMP_MAX)) "°C" }
                p { "Range: " (field(document, TEMP_RANGE)) "°C" }
            }
            div class="card" {
                h3 { "Rate of Change" }
                div class="metric-value" { (field(document, RATE_CHANGE)) }
                p class="metric-unit" { "°C/hour average" }
            }
            div class="card" {
                h3 { "Delta" }
                div class="metric-value" { (field(document, DELTA)) }
                p class="metric-unit" { "°C/hour overall" }
            }
        }
        p { "Last updated: " (field(document, LAST_UPDATED)) }
    };
    base(CurrentPage::Temperature, document, content)
}

pub fn wind_page(document: &PageDocument) -> Markup {
    let content = html! {
        form method="get" action="/wind" {
            (period_select(WIND_PERIOD_INPUT, document.input(WIND_PERIOD_INPUT)))
            label for=(CALM_THRESHOLD_INPUT) { " Calm below (km/h) " }
            input type="number" min="0" step="0.1" id=(CALM_THRESHOLD_INPUT) name=(CALM_THRESHOLD_INPUT)
                value=(document.input(CALM_THRESHOLD_INPUT));
            button type="submit" { "Refresh" }
        }
        div class="grid" {
            div class="card" {
                h3 { "Average Speed" }
                div class="metric-value" { (field(document, AVG_WIND)) }
                p class="metric-unit" { "km/h" }
            }
            div class="card" {
                h3 { "Peak Speed" }
                div class="metric-value" { (field(document, PEAK_WIND)) }
                p class="metric-unit" { "km/h" }
            }
            div class="card" {
                h3 { "Dominant Direction" }
                div class="metric-value" { (field(document, WIND_DIRECTION)) }
                p class="metric-unit" { "degrees" }
                p class="direction-text" { (field(document, DIRECTION_TEXT)) }
            }
            div class="card" {
                h3 { "Direction Variability" }
                div class="metric-value" { (field(document, WIND_VARIABILITY)) }
                p class="metric-unit" { "degrees std deviation" }
            }
            div class="card" {
                h3 { "Calm Periods" }
                p { "Calm: " (field(document, CALM_COUNT)) }
                p { "Total: " (field(document, TOTAL_PERIODS)) }
                p { "Calm share: " (field(document, CALM_PERCENTAGE)) "%" }
            }
        }
    };
    base(CurrentPage::Wind, document, content)
}
