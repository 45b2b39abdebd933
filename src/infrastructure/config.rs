// Configuration loading - defaults, optional file, then environment
use serde::Deserialize;

use crate::domain::request::{CalmThreshold, Period, RecordLimit};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DashboardConfig {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub defaults: InputDefaults,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    /// Root of the weather-analysis backend, e.g. `http://127.0.0.1:8000`.
    pub base_url: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind_addr: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Values pre-filled into page inputs when the request does not carry them.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct InputDefaults {
    pub period: u32,
    pub data_limit: u32,
    pub calm_threshold: f64,
}

impl Default for InputDefaults {
    fn default() -> Self {
        Self {
            period: 24,
            data_limit: 50,
            calm_threshold: 5.0,
        }
    }
}

impl DashboardConfig {
    fn validate(self) -> anyhow::Result<Self> {
        anyhow::ensure!(
            self.api.base_url.starts_with("http://") || self.api.base_url.starts_with("https://"),
            "api.base_url must be an http(s) URL, got '{}'",
            self.api.base_url
        );
        anyhow::ensure!(
            Period::new(self.defaults.period).is_some(),
            "defaults.period must be at least 1"
        );
        anyhow::ensure!(
            RecordLimit::new(self.defaults.data_limit).is_some(),
            "defaults.data_limit must be at least 1"
        );
        anyhow::ensure!(
            CalmThreshold::new(self.defaults.calm_threshold).is_some(),
            "defaults.calm_threshold must be a non-negative number"
        );
        Ok(self)
    }
}

// `source` replaces the process environment when set.
fn environment(source: Option<config::Map<String, String>>) -> config::Environment {
    config::Environment::with_prefix("DASHBOARD")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
        .source(source)
}

/// Built-in defaults, then `config/dashboard.*` if present, then
/// `DASHBOARD__SECTION__KEY` environment variables.
pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(environment(None))
        .build()?;

    settings.try_deserialize::<DashboardConfig>()?.validate()
}

#[cfg(test)]
fn parse_layers(source: &str, env: &[(&str, &str)]) -> anyhow::Result<DashboardConfig> {
    let vars = env
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    let settings = config::Config::builder()
        .add_source(config::File::from_str(source, config::FileFormat::Toml))
        .add_source(environment(Some(vars)))
        .build()?;

    settings.try_deserialize::<DashboardConfig>()?.validate()
}

#[cfg(test)]
fn parse_toml(source: &str) -> anyhow::Result<DashboardConfig> {
    parse_layers(source, &[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_source_uses_defaults() {
        let config = parse_toml("").unwrap();
        assert_eq!(config.api.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.server.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.defaults, InputDefaults::default());
    }

    #[test]
    fn test_partial_overrides() {
        let config = parse_toml(
            r#"
            [api]
            base_url = "http://weather-api:8000"

            [defaults]
            period = 6
            "#,
        )
        .unwrap();

        assert_eq!(config.api.base_url, "http://weather-api:8000");
        assert_eq!(config.defaults.period, 6);
        assert_eq!(config.defaults.data_limit, 50);
        assert_eq!(config.defaults.calm_threshold, 5.0);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(parse_toml("[api]\nbase_url = \"weather-api:8000\"").is_err());
        assert!(parse_toml("[defaults]\nperiod = 0").is_err());
        assert!(parse_toml("[defaults]\ncalm_threshold = -1.0").is_err());
    }

    #[test]
    fn test_environment_overrides_file() {
        let config = parse_layers(
            "[api]\nbase_url = \"http://127.0.0.1:8000\"\n[defaults]\ncalm_threshold = 5.0",
            &[
                ("DASHBOARD__API__BASE_URL", "http://weather-api:9000"),
                ("DASHBOARD__DEFAULTS__CALM_THRESHOLD", "2"),
                ("DASHBOARD__DEFAULTS__PERIOD", "12"),
                ("OTHER__API__BASE_URL", "http://ignored:1"),
            ],
        )
        .unwrap();

        assert_eq!(config.api.base_url, "http://weather-api:9000");
        assert_eq!(config.defaults.calm_threshold, 2.0);
        assert_eq!(config.defaults.period, 12);
        assert_eq!(config.defaults.data_limit, 50);
    }

    #[test]
    fn test_invalid_environment_value_rejected() {
        assert!(parse_layers("", &[("DASHBOARD__DEFAULTS__PERIOD", "0")]).is_err());
    }
}
