//! Config-store boundary and quote service
//!
//! The calculator never fetches or stores anything itself; this module
//! holds the `resolve(client_id, config_id) -> PricingConfig` contract it
//! depends on, an in-memory store implementation, a JSON loader, and the
//! caching service that ties resolution and calculation together.

mod loader;
mod service;
mod store;


pub use service::QuoteService;
pub use store::{ConfigStore, InMemoryConfigStore};
