use crate::core::fare::ProviderSpec;
use anyhow::{Context, Result, bail};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use std::{fs, path::PathBuf};
use tracing::debug;

pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// The provider integrations this service knows how to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    SnappTrip,
    MrBilit,
    Alibaba,
    FlyToday,
    Flightio,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 5] = [
        ProviderKind::SnappTrip,
        ProviderKind::MrBilit,
        ProviderKind::Alibaba,
        ProviderKind::FlyToday,
        ProviderKind::Flightio,
    ];

    pub fn default_name(&self) -> &'static str {
        match self {
            ProviderKind::SnappTrip => "SnappTrip",
            ProviderKind::MrBilit => "MrBilit",
            ProviderKind::Alibaba => "Alibaba",
            ProviderKind::FlyToday => "FlyToday",
            ProviderKind::Flightio => "Flightio",
        }
    }

    pub fn default_base_url(&self) -> &'static str {
        match self {
            ProviderKind::SnappTrip => "https://www.snapptrip.com/api/v1/flights/search",
            ProviderKind::MrBilit => "https://mrbilit.com/api/v2/flights/search",
            ProviderKind::Alibaba => "https://www.alibaba.ir/api/v1/flights/search",
            ProviderKind::FlyToday => "https://www.flytoday.ir/api/v1/flights/search",
            ProviderKind::Flightio => "https://flightio.com/api/v2/flights/search",
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub kind: ProviderKind,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
}

impl ProviderConfig {
    pub fn spec(&self) -> ProviderSpec {
        ProviderSpec {
            name: self
                .name
                .clone()
                .unwrap_or_else(|| self.kind.default_name().to_string()),
            base_url: self
                .base_url
                .clone()
                .unwrap_or_else(|| self.kind.default_base_url().to_string()),
        }
    }
}

impl From<ProviderKind> for ProviderConfig {
    fn from(kind: ProviderKind) -> Self {
        ProviderConfig {
            kind,
            name: None,
            base_url: None,
        }
    }
}

fn default_providers() -> Vec<ProviderConfig> {
    ProviderKind::ALL.into_iter().map(ProviderConfig::from).collect()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default = "default_providers")]
    pub providers: Vec<ProviderConfig>,
    /// Deadline for each provider call, in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            providers: default_providers(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl AppConfig {
    /// Loads the config from the default location, falling back to built-in
    /// defaults when no file exists there.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(
                "No config file at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("io", "flightfare", "flightfare")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        config.validate()?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.timeout_ms == 0 {
            bail!("timeout_ms must be greater than zero");
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_every_provider_in_order() {
        let config = AppConfig::default();
        let names: Vec<String> = config.providers.iter().map(|p| p.spec().name).collect();
        assert_eq!(
            names,
            vec!["SnappTrip", "MrBilit", "Alibaba", "FlyToday", "Flightio"]
        );
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
timeout_ms: 2500
providers:
  - kind: snapptrip
  - kind: mrbilit
    name: "MrBilit Staging"
    base_url: "http://localhost:9000/api/v2/flights/search"
  - kind: flightio
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.timeout_ms, 2500);
        assert_eq!(config.providers.len(), 3);
        assert_eq!(
            config.providers[0].spec(),
            ProviderSpec::new("SnappTrip", "https://www.snapptrip.com/api/v1/flights/search")
        );
        assert_eq!(config.providers[1].kind, ProviderKind::MrBilit);
        assert_eq!(
            config.providers[1].spec(),
            ProviderSpec::new(
                "MrBilit Staging",
                "http://localhost:9000/api/v2/flights/search"
            )
        );
        assert_eq!(config.providers[2].kind, ProviderKind::Flightio);
    }

    #[test]
    fn test_empty_mapping_uses_defaults() {
        let config: AppConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.providers.len(), 5);
        assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);
    }

    #[test]
    fn test_unknown_provider_kind_is_rejected() {
        let yaml_str = r#"
providers:
  - kind: expedia
"#;
        assert!(serde_yaml::from_str::<AppConfig>(yaml_str).is_err());
    }

    #[test]
    fn test_load_from_path() {
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(
            file.path(),
            "timeout_ms: 500\nproviders:\n  - kind: alibaba\n",
        )
        .unwrap();

        let config = AppConfig::load_from_path(file.path()).unwrap();
        assert_eq!(config.timeout(), Duration::from_millis(500));
        assert_eq!(config.providers, vec![ProviderConfig::from(ProviderKind::Alibaba)]);
    }

    #[test]
    fn test_load_from_path_rejects_zero_timeout() {
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(file.path(), "timeout_ms: 0\n").unwrap();

        let err = AppConfig::load_from_path(file.path()).unwrap_err();
        assert!(err.to_string().contains("timeout_ms"));
    }

    #[test]
    fn test_load_from_missing_path_fails() {
        let err = AppConfig::load_from_path("/nonexistent/flightfare.yaml").unwrap_err();
        assert!(err.to_string().starts_with("Failed to read config file"));
    }
}
