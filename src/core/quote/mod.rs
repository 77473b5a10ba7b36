//! Quote calculation module
//!
//! Turns a shipment request plus a resolved rate configuration into an
//! itemized cost breakdown. The calculator is a pure function over an
//! immutable config snapshot; tier classification, temporal surcharge
//! evaluation and rounding live in their own submodules.

pub mod calculator;
pub mod rounding;
pub mod surcharge;
pub mod tiers;
pub mod types;

pub use calculator::price_shipment;
pub use rounding::round_half_up;
pub use surcharge::{HolidayCalendar, TemporalFactors, duration_days};
pub use tiers::{TruckTier, WeightTier, classify_truck_tier, classify_weight_tier};
pub use types::{CargoUnit, PricingBreakdown, RouteType, ShipmentRequest};
