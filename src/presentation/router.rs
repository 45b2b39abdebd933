// Route table for the dashboard pages
use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    data_page, health_check, summary_page, temperature_page, wind_page,
};

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(summary_page))
        .route("/data", get(data_page))
        .route("/temperature", get(temperature_page))
        .route("/wind", get(wind_page))
        .route("/healthz", get(health_check))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::FakeWeatherApi;
    use crate::infrastructure::config::InputDefaults;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use serde_json::json;
    use tower::ServiceExt;

    async fn get_html(api: FakeWeatherApi, uri: &str) -> (StatusCode, String) {
        let state = Arc::new(AppState {
            api: Arc::new(api),
            defaults: InputDefaults::default(),
        });
        let response = build_router(state)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health_check() {
        let (status, body) = get_html(FakeWeatherApi::new(), "/healthz").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn test_summary_uses_default_period() {
        let api = FakeWeatherApi::new().respond(
            "/summary?period=24",
            json!({"period": 24, "summary": {"average_temperature": 21.5, "data_points": 24}}),
        );

        let (status, html) = get_html(api, "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains(r#"<div class="metric-value">21.5</div>"#));
        assert!(html.contains(r#"<div id="loading" hidden>"#));
        assert!(html.contains(r#"<div id="error" class="error" hidden>"#));
    }

    #[tokio::test]
    async fn test_data_page_counts() {
        let api = FakeWeatherApi::new().respond(
            "/data?limit=5",
            json!({"count": 2, "data": [
                {"id": 0, "time": "2025-10-07T12:00", "temperature": 20.1, "windspeed": 3.2, "winddirection": 10, "weathercode": 0, "is_day": 1},
                {"id": 1, "time": "2025-10-07T12:15", "temperature": 20.4, "windspeed": 4.0, "winddirection": 200, "weathercode": 1, "is_day": 1}
            ]}),
        );

        let (_, html) = get_html(api, "/data?data-limit=5").await;

        assert!(html.contains(r#"<span id="total-records">2</span>"#));
        assert!(html.contains(r#"<span id="showing-records">2</span>"#));
        assert!(html.contains("200° (SSW)"));
        assert!(html.contains(r#"value="5""#));
    }

    #[tokio::test]
    async fn test_wind_page_with_failed_calm_periods() {
        let api = FakeWeatherApi::new()
            .respond("/wind/average-speed?period=7", json!({"average_windspeed": 9}))
            .respond("/wind/peak-speed?period=7", json!({"peak_windspeed": 21}))
            .respond("/wind/dominant-direction?period=7", json!({"dominant_direction": 0}))
            .respond("/wind/direction-variability?period=7", json!({"direction_variability": 12}))
            .fail("/wind/calm-periods?period=7&threshold=2.5", 500);

        let (_, html) = get_html(api, "/wind?wind-period=7&calm-threshold=2.5").await;

        assert!(html.contains(r#"<span id="avg-wind">9</span>"#));
        assert!(html.contains(r#"<span id="direction-text">N</span>"#));
        assert!(html.contains(r#"<span id="calm-count">--</span>"#));
        assert!(html.contains(r#"<div id="error" class="error" hidden>"#));
    }

    #[tokio::test]
    async fn test_temperature_failure_shows_message() {
        let api = FakeWeatherApi::new().fail("/temperature/average?period=24", 503);

        let (status, html) = get_html(api, "/temperature").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Failed to load temperature data. Please check if the API is running."));
        assert!(html.contains(r#"<span id="avg-temp">--</span>"#));
        assert!(html.contains(r#"<div id="loading" hidden>"#));
    }
}
