//! Config loading from disk
//!
//! Reads a JSON array of pricing configs; each entry is validated before it
//! reaches the store, so a malformed schedule on disk fails the whole load
//! rather than surfacing later as a quote-time error.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::pricing::PricingConfig;
use crate::services::pricing::store::InMemoryConfigStore;
use crate::utils::error::Result;

impl InMemoryConfigStore {
    /// Build a store from a JSON file containing `[PricingConfig, ...]`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let configs: Vec<PricingConfig> = serde_json::from_str(&content)?;

        debug!(
            count = configs.len(),
            path = %path.as_ref().display(),
            "loaded pricing configs from file"
        );

        let store = Self::new();
        for config in configs {
            store.insert(config)?;
        }
        Ok(store)
    }
}
