//! Pricing configuration store
//!
//! Uniqueness of `active` per (client, type) is enforced here, not in the
//! calculator; the calculator only ever consumes one resolved config.

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::{debug, info};

use crate::config::pricing::PricingConfig;
use crate::config::validation::Validate;
use crate::utils::error::{QuoteError, Result};

/// Resolution contract toward the pricing engine.
///
/// An explicit `config_id` selects that exact version regardless of its
/// `active` flag; without one, the unique active config for the client
/// governs, falling back to the system default schedule.
pub trait ConfigStore: Send + Sync {
    fn resolve(&self, client_id: &str, config_id: Option<&str>) -> Result<PricingConfig>;
}

/// Consolidated store state - single lock for config data
#[derive(Debug, Default)]
struct StoreData {
    /// Configs by id
    configs: HashMap<String, PricingConfig>,
}

/// In-memory configuration store
#[derive(Debug, Default)]
pub struct InMemoryConfigStore {
    data: RwLock<StoreData>,
}

impl InMemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a validated config. Activating a config deactivates any other
    /// active config of the same (client, type).
    pub fn insert(&self, config: PricingConfig) -> Result<()> {
        config.validate().map_err(QuoteError::validation)?;

        let mut data = self.data.write();
        if config.active {
            deactivate_siblings(&mut data, &config);
        }
        debug!(config = %config.id, client = %config.client_id, "stored pricing config");
        data.configs.insert(config.id.clone(), config);
        Ok(())
    }

    /// Mark a config active, deactivating its (client, type) siblings.
    pub fn activate(&self, config_id: &str) -> Result<()> {
        let mut data = self.data.write();
        let target = data
            .configs
            .get(config_id)
            .cloned()
            .ok_or_else(|| QuoteError::not_found(format!("pricing config '{config_id}'")))?;

        deactivate_siblings(&mut data, &target);
        if let Some(config) = data.configs.get_mut(config_id) {
            config.active = true;
        }
        info!(config = %config_id, "activated pricing config");
        Ok(())
    }

    pub fn deactivate(&self, config_id: &str) -> Result<()> {
        let mut data = self.data.write();
        let config = data
            .configs
            .get_mut(config_id)
            .ok_or_else(|| QuoteError::not_found(format!("pricing config '{config_id}'")))?;
        config.active = false;
        info!(config = %config_id, "deactivated pricing config");
        Ok(())
    }

    pub fn remove(&self, config_id: &str) -> Result<()> {
        let mut data = self.data.write();
        data.configs
            .remove(config_id)
            .ok_or_else(|| QuoteError::not_found(format!("pricing config '{config_id}'")))?;
        info!(config = %config_id, "removed pricing config");
        Ok(())
    }

    /// All stored configs for one client, any activation state.
    pub fn configs_for_client(&self, client_id: &str) -> Vec<PricingConfig> {
        let data = self.data.read();
        let mut configs: Vec<_> = data
            .configs
            .values()
            .filter(|c| c.client_id == client_id)
            .cloned()
            .collect();
        configs.sort_by(|a, b| a.id.cmp(&b.id));
        configs
    }

    pub fn len(&self) -> usize {
        self.data.read().configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.read().configs.is_empty()
    }
}

fn deactivate_siblings(data: &mut StoreData, config: &PricingConfig) {
    for sibling in data.configs.values_mut() {
        if sibling.id != config.id
            && sibling.client_id == config.client_id
            && sibling.config_type == config.config_type
        {
            sibling.active = false;
        }
    }
}

impl ConfigStore for InMemoryConfigStore {
    fn resolve(&self, client_id: &str, config_id: Option<&str>) -> Result<PricingConfig> {
        let data = self.data.read();

        if let Some(id) = config_id {
            // Explicit selection wins regardless of the active flag
            return data
                .configs
                .get(id)
                .filter(|c| c.client_id == client_id)
                .cloned()
                .ok_or_else(|| {
                    QuoteError::not_found(format!(
                        "pricing config '{id}' for client '{client_id}'"
                    ))
                });
        }

        match data
            .configs
            .values()
            .find(|c| c.client_id == client_id && c.active)
        {
            Some(config) => Ok(config.clone()),
            None => {
                debug!(client = %client_id, "no active config, using system default");
                Ok(PricingConfig::system_default(client_id))
            }
        }
    }
}
