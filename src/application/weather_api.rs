// Weather API trait for backend access
use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::domain::request::Endpoint;
use crate::error::{DashboardError, Result};

#[async_trait]
pub trait WeatherApi: Send + Sync {
    /// GET the endpoint and return its JSON body.
    ///
    /// Fails on network errors and on any non-success status.
    async fn fetch(&self, endpoint: &Endpoint) -> Result<serde_json::Value>;
}

/// Fetch an endpoint and decode the body into a response shape.
pub async fn fetch_as<T: DeserializeOwned>(api: &dyn WeatherApi, endpoint: Endpoint) -> Result<T> {
    let body = api.fetch(&endpoint).await?;
    serde_json::from_value(body).map_err(|source| DashboardError::Decode {
        path: endpoint.path_and_query(),
        source,
    })
}
