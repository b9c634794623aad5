use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RateProviderConfig {
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
}

impl Default for RateProviderConfig {
    fn default() -> Self {
        RateProviderConfig {
            base_url: "https://api.currencyapi.com/v3/latest".to_string(),
            api_key: String::new(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub provider: RateProviderConfig,
    /// Currency amounts are converted from by default.
    #[serde(default = "default_base_currency")]
    pub base_currency: String,
    /// Currency amounts are converted to by default.
    #[serde(default = "default_target_currency")]
    pub target_currency: String,
    /// Days shown in the trend chart.
    #[serde(default = "default_trend_days")]
    pub trend_days: usize,
}

fn default_base_currency() -> String {
    "USD".to_string()
}

fn default_target_currency() -> String {
    "EUR".to_string()
}

fn default_trend_days() -> usize {
    7
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            provider: RateProviderConfig::default(),
            base_currency: default_base_currency(),
            target_currency: default_target_currency(),
            trend_days: default_trend_days(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("dev", "fxc", "fxc")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
provider:
  base_url: "http://example.com/v3/latest"
  api_key: "secret"
base_currency: "GBP"
target_currency: "JPY"
trend_days: 14
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.provider.base_url, "http://example.com/v3/latest");
        assert_eq!(config.provider.api_key, "secret");
        assert_eq!(config.base_currency, "GBP");
        assert_eq!(config.target_currency, "JPY");
        assert_eq!(config.trend_days, 14);
    }

    #[test]
    fn test_config_defaults() {
        let config: AppConfig = serde_yaml::from_str("{}").expect("Failed to deserialize");
        assert_eq!(
            config.provider.base_url,
            "https://api.currencyapi.com/v3/latest"
        );
        assert!(config.provider.api_key.is_empty());
        assert_eq!(config.base_currency, "USD");
        assert_eq!(config.target_currency, "EUR");
        assert_eq!(config.trend_days, 7);
    }

    #[test]
    fn test_config_partial_override() {
        let yaml_str = r#"
provider:
  base_url: "http://localhost:9000/latest"
target_currency: "PKR"
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.provider.base_url, "http://localhost:9000/latest");
        assert_eq!(config.base_currency, "USD");
        assert_eq!(config.target_currency, "PKR");
    }
}
