//! Provider loader for building the registry from configuration

use super::hazards::HazardsProvider;
use super::http_store::HttpStore;
use super::places::PlacesProvider;
use super::registry::ProviderRegistry;
use super::store::{MemoryStore, RecordStore};
use super::traits::SearchProvider;
use super::users::UsersProvider;
use crate::config::{BackendConfig, ProviderConfig, Settings};
use crate::search::Category;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

/// Loader for initializing providers from configuration
pub struct ProviderLoader;

impl ProviderLoader {
    /// Load all enabled providers from settings
    pub fn load(settings: &Settings) -> Result<ProviderRegistry> {
        let mut registry = ProviderRegistry::new();

        for config in &settings.providers {
            if config.disabled {
                info!("Skipping disabled provider: {}", config.category);
                continue;
            }

            let provider = Self::create_provider(config)
                .with_context(|| format!("failed to load {} provider", config.category))?;
            info!(
                "Loaded provider: {} ({} backend)",
                provider.name(),
                config.backend.kind()
            );
            registry.register(provider);
        }

        info!("Loaded {} providers", registry.len());
        Ok(registry)
    }

    /// Create a provider instance for one configuration entry
    pub fn create_provider(config: &ProviderConfig) -> Result<Arc<dyn SearchProvider>> {
        let store = Self::create_store(&config.backend)?;

        let provider: Arc<dyn SearchProvider> = match config.category {
            Category::Places => {
                Arc::new(PlacesProvider::new(store).with_radius(config.max_distance_km))
            }
            Category::Users => Arc::new(UsersProvider::new(store)),
            Category::Hazards => {
                Arc::new(HazardsProvider::new(store).with_radius(config.max_distance_km))
            }
        };

        Ok(provider)
    }

    fn create_store(backend: &BackendConfig) -> Result<Arc<dyn RecordStore>> {
        match backend {
            BackendConfig::Memory { records } => Ok(Arc::new(MemoryStore::new(records.clone()))),
            BackendConfig::Http {
                base_url,
                user_agent,
            } => Ok(Arc::new(HttpStore::with_user_agent(
                base_url.clone(),
                user_agent.as_deref(),
            )?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::Record;
    use crate::search::{Coordinates, SearchQuery};
    use std::time::Duration;
    use tokio::time::Instant;

    fn hazards_config(max_distance_km: Option<f64>) -> ProviderConfig {
        ProviderConfig {
            category: Category::Hazards,
            disabled: false,
            max_distance_km,
            backend: BackendConfig::Memory {
                records: vec![
                    Record::new("1", "Traffic Jam").with_location(40.7580, -73.9855),
                    Record::new("2", "Traffic Light Out").with_location(42.3601, -71.0589),
                ],
            },
        }
    }

    async fn hazard_ids(config: &ProviderConfig) -> Vec<String> {
        let provider = ProviderLoader::create_provider(config).unwrap();
        let query = SearchQuery::new("traffic", Category::Hazards)
            .with_origin(Coordinates::new(42.3601, -71.0589));
        let deadline = Instant::now() + Duration::from_secs(1);

        let mut ids: Vec<String> = provider
            .search(&query, deadline)
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.id)
            .collect();
        ids.sort();
        ids
    }

    #[tokio::test]
    async fn test_unconfigured_hazards_radius_keeps_distant_records() {
        assert_eq!(hazard_ids(&hazards_config(None)).await, vec!["1", "2"]);
    }

    #[tokio::test]
    async fn test_configured_hazards_radius_drops_distant_records() {
        assert_eq!(hazard_ids(&hazards_config(Some(50.0))).await, vec!["2"]);
    }

    #[tokio::test]
    async fn test_default_settings_hazards_search_from_far_origin() {
        let registry = ProviderLoader::load(&Settings::default()).unwrap();
        let provider = registry.resolve(Category::Hazards).unwrap();
        let query = SearchQuery::new("traffic", Category::Hazards)
            .with_origin(Coordinates::new(42.3601, -71.0589));

        let results = provider
            .search(&query, Instant::now() + Duration::from_secs(1))
            .await
            .unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "2");
    }

    #[test]
    fn test_load_defaults() {
        let registry = ProviderLoader::load(&Settings::default()).unwrap();
        assert_eq!(registry.categories(), Category::ALL.to_vec());
    }

    #[test]
    fn test_disabled_provider_is_skipped() {
        let mut settings = Settings::default();
        for provider in settings.providers.iter_mut() {
            if provider.category == Category::Users {
                provider.disabled = true;
            }
        }

        let registry = ProviderLoader::load(&settings).unwrap();
        assert!(!registry.contains(Category::Users));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_http_backend() {
        let config = ProviderConfig {
            category: Category::Places,
            disabled: false,
            max_distance_km: Some(10.0),
            backend: BackendConfig::Http {
                base_url: "http://localhost:9000".to_string(),
                user_agent: None,
            },
        };

        let provider = ProviderLoader::create_provider(&config).unwrap();
        assert_eq!(provider.category(), Category::Places);
    }
}
