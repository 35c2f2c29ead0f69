//! Settings structures for the search service

use crate::providers::Record;
use crate::search::Category;
use crate::{DEFAULT_PAGE_SIZE, DEFAULT_TIMEOUT_MS};
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

/// Main settings structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub search: SearchSettings,
    pub providers: Vec<ProviderConfig>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings::default(),
            search: SearchSettings::default(),
            providers: default_providers(),
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse settings from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        let settings: Settings = serde_yaml::from_str(content)?;
        Ok(settings)
    }

    /// Merge with environment variables (WANDER_* prefix)
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("WANDER_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("WANDER_BIND_ADDRESS") {
            self.server.bind_address = val;
        }
        if let Ok(val) = std::env::var("WANDER_TIMEOUT_MS") {
            if let Ok(ms) = val.parse() {
                self.search.timeout_ms = ms;
            }
        }
        if let Ok(val) = std::env::var("WANDER_PAGE_SIZE") {
            if let Ok(size) = val.parse() {
                self.search.page_size = size;
            }
        }
    }

    /// Reject settings the service cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.search.timeout_ms == 0 {
            bail!("search.timeout_ms must be greater than zero");
        }
        if self.search.page_size == 0 {
            bail!("search.page_size must be greater than zero");
        }

        let mut seen = HashSet::new();
        for provider in &self.providers {
            if !seen.insert(provider.category) {
                bail!("provider for '{}' is configured twice", provider.category);
            }
            if let BackendConfig::Http { base_url, .. } = &provider.backend {
                if base_url.trim().is_empty() {
                    bail!("provider '{}' has an empty base_url", provider.category);
                }
            }
            if provider.max_distance_km.is_some_and(|r| !(r > 0.0)) {
                bail!(
                    "provider '{}' max_distance_km must be positive",
                    provider.category
                );
            }
        }
        Ok(())
    }

    /// Get provider config by category
    pub fn get_provider(&self, category: Category) -> Option<&ProviderConfig> {
        self.providers.iter().find(|p| p.category == category)
    }
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server port
    pub port: u16,
    /// Bind address
    pub bind_address: String,
    /// Allow cross-origin requests
    pub cors: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_address: "127.0.0.1".to_string(),
            cors: true,
        }
    }
}

/// Search behavior settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Per-request provider deadline in milliseconds
    pub timeout_ms: u64,
    /// Maximum number of results per response
    pub page_size: usize,
    /// Maximum query length in characters
    pub max_query_length: usize,
}

impl SearchSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT_MS,
            page_size: DEFAULT_PAGE_SIZE,
            max_query_length: 256,
        }
    }
}

/// Individual provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Category served by this provider
    pub category: Category,
    /// Whether provider is disabled
    #[serde(default)]
    pub disabled: bool,
    /// Drop results farther than this from the query origin
    #[serde(default)]
    pub max_distance_km: Option<f64>,
    /// Where records come from
    #[serde(default)]
    pub backend: BackendConfig,
}

/// Backing store for a provider
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BackendConfig {
    /// Records listed inline
    Memory {
        #[serde(default)]
        records: Vec<Record>,
    },
    /// Remote lookup service
    Http {
        base_url: String,
        #[serde(default)]
        user_agent: Option<String>,
    },
}

impl BackendConfig {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Memory { .. } => "memory",
            Self::Http { .. } => "http",
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::Memory {
            records: Vec::new(),
        }
    }
}

/// Default provider configurations, seeded with sample records
fn default_providers() -> Vec<ProviderConfig> {
    vec![
        ProviderConfig {
            category: Category::Places,
            disabled: false,
            max_distance_km: None,
            backend: BackendConfig::Memory {
                records: vec![
                    Record::new("1", "Central Park")
                        .with_description("Popular park in NYC")
                        .with_location(40.7829, -73.9654),
                    Record::new("2", "Times Square")
                        .with_description("Famous intersection")
                        .with_location(40.7580, -73.9855),
                ],
            },
        },
        ProviderConfig {
            category: Category::Users,
            disabled: false,
            max_distance_km: None,
            backend: BackendConfig::Memory {
                records: vec![
                    Record::new("1", "john_doe").with_description("User"),
                    Record::new("2", "jane_smith").with_description("User"),
                ],
            },
        },
        ProviderConfig {
            category: Category::Hazards,
            disabled: false,
            max_distance_km: None,
            backend: BackendConfig::Memory {
                records: vec![
                    Record::new("1", "Construction Zone")
                        .with_description("Road construction ahead")
                        .with_location(40.7829, -73.9654),
                    Record::new("2", "Traffic Jam")
                        .with_description("Heavy traffic on route")
                        .with_location(40.7580, -73.9855),
                ],
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.search.timeout(), Duration::from_millis(2000));
        assert_eq!(settings.search.page_size, 50);
        assert_eq!(settings.providers.len(), 3);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_provider_lookup() {
        let settings = Settings::default();
        let users = settings.get_provider(Category::Users);
        assert!(users.is_some());
        assert_eq!(users.unwrap().backend.kind(), "memory");
    }

    #[test]
    fn test_yaml_parsing() {
        let yaml = r#"
server:
  port: 9090
search:
  timeout_ms: 500
providers:
  - category: places
    max_distance_km: 25
    backend:
      kind: http
      base_url: http://places.internal
  - category: users
    backend:
      kind: memory
      records:
        - id: "7"
          title: alice
"#;
        let settings = Settings::from_yaml(yaml).unwrap();
        assert_eq!(settings.server.port, 9090);
        assert_eq!(settings.server.bind_address, "127.0.0.1");
        assert_eq!(settings.search.timeout_ms, 500);
        assert_eq!(settings.search.page_size, 50);
        assert_eq!(settings.providers.len(), 2);
        assert_eq!(settings.providers[0].max_distance_km, Some(25.0));
        assert_eq!(settings.providers[0].backend.kind(), "http");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_unknown_category_in_yaml_is_rejected() {
        let yaml = "providers:\n  - category: Vehicles\n";
        assert!(Settings::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_validation_failures() {
        let mut settings = Settings::default();
        settings.search.page_size = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.search.timeout_ms = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        let duplicate = settings.providers[0].clone();
        settings.providers.push(duplicate);
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.providers[0].backend = BackendConfig::Http {
            base_url: " ".to_string(),
            user_agent: None,
        };
        assert!(settings.validate().is_err());
    }
}
