// HTTP implementation of the weather API
use async_trait::async_trait;
use reqwest::header::ACCEPT;

use crate::application::weather_api::WeatherApi;
use crate::domain::request::Endpoint;
use crate::error::{DashboardError, Result};

#[derive(Debug, Clone)]
pub struct HttpWeatherApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpWeatherApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn build_url(&self, endpoint: &Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path_and_query())
    }
}

#[async_trait]
impl WeatherApi for HttpWeatherApi {
    async fn fetch(&self, endpoint: &Endpoint) -> Result<serde_json::Value> {
        let path = endpoint.path_and_query();
        let url = self.build_url(endpoint);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|source| DashboardError::Transport {
                path: path.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!("{} returned {}: {}", path, status, body);
            return Err(DashboardError::Status {
                path,
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| DashboardError::Transport {
                path: path.clone(),
                source,
            })?;

        serde_json::from_slice(&body).map_err(|source| DashboardError::Decode { path, source })
    }
}
