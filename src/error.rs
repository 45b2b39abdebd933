// Dashboard error types
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("request to {path} failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {path} returned status {status}")]
    Status { path: String, status: u16 },

    #[error("unexpected response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid value {value:?} for input '{input}'")]
    InvalidInput { input: String, value: String },

    /// A follow-up feature failed after the primary content loaded.
    #[error("partial feature '{feature}' unavailable: {source}")]
    PartialFeature {
        feature: &'static str,
        #[source]
        source: Box<DashboardError>,
    },
}

impl DashboardError {
    /// True for failures raised by the backend request itself (network, status, body).
    pub fn is_request_failure(&self) -> bool {
        matches!(
            self,
            DashboardError::Transport { .. }
                | DashboardError::Status { .. }
                | DashboardError::Decode { .. }
        )
    }

    pub fn partial(feature: &'static str, source: DashboardError) -> Self {
        DashboardError::PartialFeature {
            feature,
            source: Box::new(source),
        }
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;
