//! Application state for the subscription gateway.

use std::sync::Arc;

use common::config::AppConfig;
use common::errors::AppResult;

use crate::client::{AppwriteClient, DocumentStore};
use crate::service::SubscriptionService;

/// Application state shared across handlers. Read-only after construction.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub store: Arc<dyn DocumentStore>,
}

impl AppState {
    /// Creates a new application state backed by Appwrite.
    pub fn new(config: AppConfig) -> AppResult<Self> {
        let store = Arc::new(AppwriteClient::new(&config.appwrite)?);
        Ok(Self::with_store(config, store))
    }

    /// Creates a state around an existing document store.
    pub fn with_store(config: AppConfig, store: Arc<dyn DocumentStore>) -> Self {
        Self { config, store }
    }

    /// Subscription service bound to this state's store and collection.
    pub fn subscriptions(&self) -> SubscriptionService {
        SubscriptionService::new(self.store.clone(), &self.config.appwrite)
    }
}
