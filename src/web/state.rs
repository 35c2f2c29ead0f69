//! Application state shared across handlers

use crate::config::Settings;
use crate::providers::ProviderRegistry;
use crate::search::Dispatcher;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Global settings
    pub settings: Arc<Settings>,
    /// Search dispatcher, owning the read-only provider registry
    pub dispatcher: Arc<Dispatcher>,
}

impl AppState {
    /// Create new application state
    pub fn new(settings: Settings, registry: ProviderRegistry) -> Self {
        let dispatcher = Dispatcher::from_settings(Arc::new(registry), &settings.search);

        Self {
            settings: Arc::new(settings),
            dispatcher: Arc::new(dispatcher),
        }
    }

    /// Whether cross-origin requests are allowed
    pub fn cors_enabled(&self) -> bool {
        self.settings.server.cors
    }
}
