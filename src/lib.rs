//! # Fleetquote
//!
//! A deterministic transportation pricing engine: versioned, per-client rate
//! configurations and a pure quote calculator that turns a shipment request
//! into an itemized cost breakdown.
//!
//! ## Features
//!
//! - **Tiered rate tables**: truck-size and cargo-weight tiers selected by
//!   fixed bracket classifiers, per-kilometer rates by route type
//! - **Temporal surcharges**: peak-hour, weekend, holiday and multi-day
//!   overtime percentages, evaluated from pickup/delivery timestamps
//! - **Itemized breakdowns**: every line item rounded at the configured
//!   precision, the total rounded once from full-precision intermediates
//! - **Pure core**: the calculator performs no I/O and holds no state; it is
//!   safe to call concurrently on immutable config snapshots
//! - **Store boundary**: config resolution and the holiday calendar are
//!   injected collaborators behind small traits
//!
//! ## Quick Start
//!
//! ```rust
//! use fleetquote::{
//!     CargoUnit, PricingConfig, RouteType, ShipmentRequest, NoHolidays, price_shipment,
//! };
//!
//! let config = PricingConfig::system_default("client-1");
//! let request = ShipmentRequest {
//!     truck_capacity_tons: 5.0,
//!     cargo_weight: 800.0,
//!     cargo_unit: CargoUnit::Kilograms,
//!     distance_km: 50.0,
//!     route_type: RouteType::Local,
//!     pickup_at: None,
//!     delivery_at: None,
//!     requires_refrigeration: false,
//!     requires_special_equipment: false,
//!     requires_escort: false,
//!     is_urgent_delivery: false,
//! };
//!
//! let breakdown = price_shipment(&config, &request, &NoHolidays)?;
//! assert!(breakdown.estimated_cost >= breakdown.base_rate);
//! # Ok::<(), fleetquote::QuoteError>(())
//! ```
//!
//! ## Service Mode
//!
//! ```rust
//! use std::sync::Arc;
//! use fleetquote::{InMemoryConfigStore, NoHolidays, QuoteService};
//!
//! let store = Arc::new(InMemoryConfigStore::new());
//! let service = QuoteService::new(store, Arc::new(NoHolidays));
//! // service.quote("client-1", None, &request) resolves the client's active
//! // config (or the system default) and prices against it.
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod services;
pub mod utils;

// Re-export main types
pub use config::{
    AdditionalCosts, ConfigType, PricingConfig, SpecialHandlingRates, SurchargeRates, Validate,
};
pub use crate::core::quote::{
    CargoUnit, HolidayCalendar, PricingBreakdown, RouteType, ShipmentRequest, TemporalFactors,
    TruckTier, WeightTier, classify_truck_tier, classify_weight_tier, duration_days,
    price_shipment, round_half_up,
};
pub use services::{
    ConfigStore, FixedHolidayCalendar, InMemoryConfigStore, NoHolidays, QuoteService,
};
pub use utils::error::{QuoteError, Result};
pub use utils::logging::init_tracing;

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
