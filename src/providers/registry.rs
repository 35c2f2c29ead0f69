//! Provider registry mapping each category to its provider

use super::traits::SearchProvider;
use crate::error::RegistryError;
use crate::search::Category;
use std::collections::HashMap;
use std::sync::Arc;

/// Registry of the configured providers, one per category.
///
/// Built once at startup and shared read-only behind an `Arc`.
pub struct ProviderRegistry {
    providers: HashMap<Category, Arc<dyn SearchProvider>>,
}

impl ProviderRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            providers: HashMap::new(),
        }
    }

    /// Register a provider under its own category, returning the one it
    /// replaces
    pub fn register(
        &mut self,
        provider: Arc<dyn SearchProvider>,
    ) -> Option<Arc<dyn SearchProvider>> {
        self.providers.insert(provider.category(), provider)
    }

    /// Resolve the provider for a category
    pub fn resolve(&self, category: Category) -> Result<Arc<dyn SearchProvider>, RegistryError> {
        self.providers
            .get(&category)
            .cloned()
            .ok_or(RegistryError::UnknownCategory(category))
    }

    /// Registered categories in canonical order
    pub fn categories(&self) -> Vec<Category> {
        let mut categories: Vec<Category> = self.providers.keys().copied().collect();
        categories.sort();
        categories
    }

    /// Provider names in category order
    pub fn names(&self) -> Vec<&str> {
        self.categories()
            .into_iter()
            .filter_map(|c| self.providers.get(&c).map(|p| p.name()))
            .collect()
    }

    pub fn contains(&self, category: Category) -> bool {
        self.providers.contains_key(&category)
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}
