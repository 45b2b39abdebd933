// HTTP request handlers
use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Html;

use crate::application::data_controller::DataController;
use crate::application::page::{PageController, init_page};
use crate::application::summary_controller::SummaryController;
use crate::application::temperature_controller::TemperatureController;
use crate::application::wind_controller::WindController;
use crate::domain::elements::{
    CALM_THRESHOLD_INPUT, DATA_LIMIT_INPUT, PERIOD_INPUT, TEMP_PERIOD_INPUT, WIND_PERIOD_INPUT,
};
use crate::domain::format::format_number;
use crate::presentation::app_state::AppState;
use crate::presentation::document::PageDocument;
use crate::presentation::templates;

type InputParams = Query<HashMap<String, String>>;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Build a fresh document with each input taken from the query string, or its default.
fn prefill(params: &HashMap<String, String>, inputs: &[(&str, String)]) -> PageDocument {
    inputs
        .iter()
        .fold(PageDocument::new(), |document, (id, default)| {
            let value = params.get(*id).cloned().unwrap_or_else(|| default.clone());
            document.with_input(id, value)
        })
}

async fn run(state: &AppState, controller: &dyn PageController, mut document: PageDocument) -> PageDocument {
    init_page(controller, state.api.as_ref(), &mut document).await;
    document
}

pub async fn summary_page(State(state): State<Arc<AppState>>, Query(params): InputParams) -> Html<String> {
    let document = prefill(&params, &[(PERIOD_INPUT, state.defaults.period.to_string())]);
    let document = run(&state, &SummaryController, document).await;
    Html(templates::summary_page(&document).into_string())
}

pub async fn data_page(State(state): State<Arc<AppState>>, Query(params): InputParams) -> Html<String> {
    let document = prefill(&params, &[(DATA_LIMIT_INPUT, state.defaults.data_limit.to_string())]);
    let document = run(&state, &DataController, document).await;
    Html(templates::data_page(&document).into_string())
}

pub async fn temperature_page(
    State(state): State<Arc<AppState>>,
    Query(params): InputParams,
) -> Html<String> {
    let document = prefill(&params, &[(TEMP_PERIOD_INPUT, state.defaults.period.to_string())]);
    let document = run(&state, &TemperatureController, document).await;
    Html(templates::temperature_page(&document).into_string())
}

pub async fn wind_page(State(state): State<Arc<AppState>>, Query(params): InputParams) -> Html<String> {
    let document = prefill(
        &params,
        &[
            (WIND_PERIOD_INPUT, state.defaults.period.to_string()),
            (CALM_THRESHOLD_INPUT, format_number(state.defaults.calm_threshold)),
        ],
    );
    let document = run(&state, &WindController, document).await;
    Html(templates::wind_page(&document).into_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefill_prefers_query_values() {
        let mut params = HashMap::new();
        params.insert(WIND_PERIOD_INPUT.to_string(), "6".to_string());
        params.insert("unrelated".to_string(), "x".to_string());

        let document = prefill(
            &params,
            &[
                (WIND_PERIOD_INPUT, "24".to_string()),
                (CALM_THRESHOLD_INPUT, "5".to_string()),
            ],
        );

        assert_eq!(document.input(WIND_PERIOD_INPUT), "6");
        assert_eq!(document.input(CALM_THRESHOLD_INPUT), "5");
        assert_eq!(document.input("unrelated"), "");
    }
}
