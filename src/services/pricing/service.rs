//! Quote service: resolution, caching and calculation in one call
//!
//! Configs change rarely, so resolved snapshots are cached with a TTL; the
//! pure calculator runs on the cached snapshot. Holiday lookups go through
//! the injected calendar without retries or caching here.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::RwLock;
use tracing::{debug, info};

use crate::config::pricing::PricingConfig;
use crate::core::quote::calculator::price_shipment;
use crate::core::quote::surcharge::HolidayCalendar;
use crate::core::quote::types::{PricingBreakdown, ShipmentRequest};
use crate::services::pricing::store::ConfigStore;
use crate::utils::error::Result;

const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(3600);

struct CachedConfig {
    config: PricingConfig,
    loaded_at: Instant,
}

/// Facade over config resolution and quote calculation
pub struct QuoteService {
    store: Arc<dyn ConfigStore>,
    calendar: Arc<dyn HolidayCalendar>,
    cache: RwLock<HashMap<(String, Option<String>), CachedConfig>>,
    cache_ttl: Duration,
}

impl QuoteService {
    pub fn new(store: Arc<dyn ConfigStore>, calendar: Arc<dyn HolidayCalendar>) -> Self {
        Self {
            store,
            calendar,
            cache: RwLock::new(HashMap::new()),
            cache_ttl: DEFAULT_CACHE_TTL,
        }
    }

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    /// Resolve the governing config for the client and price the shipment.
    pub fn quote(
        &self,
        client_id: &str,
        config_id: Option<&str>,
        request: &ShipmentRequest,
    ) -> Result<PricingBreakdown> {
        let config = self.resolve_cached(client_id, config_id)?;
        let breakdown = price_shipment(&config, request, self.calendar.as_ref())?;

        info!(
            client = %client_id,
            config = %config.id,
            total = breakdown.estimated_cost,
            currency = %breakdown.currency_code,
            "priced shipment"
        );
        Ok(breakdown)
    }

    /// Drop every cached config snapshot.
    pub fn invalidate_cache(&self) {
        self.cache.write().clear();
        debug!("pricing config cache invalidated");
    }

    fn resolve_cached(&self, client_id: &str, config_id: Option<&str>) -> Result<PricingConfig> {
        let key = (client_id.to_string(), config_id.map(str::to_string));

        {
            let cache = self.cache.read();
            if let Some(entry) = cache.get(&key) {
                if entry.loaded_at.elapsed() < self.cache_ttl {
                    return Ok(entry.config.clone());
                }
            }
        }

        let config = self.store.resolve(client_id, config_id)?;
        debug!(client = %client_id, config = %config.id, "resolved pricing config");

        self.cache.write().insert(
            key,
            CachedConfig {
                config: config.clone(),
                loaded_at: Instant::now(),
            },
        );
        Ok(config)
    }
}
