//! Pricing configuration models
//!
//! One `PricingConfig` is one rate schedule version for one client. Configs
//! are immutable value objects here; creation, activation and deletion are
//! the store's concern, and the calculator only ever reads an already
//! resolved snapshot for the duration of a single calculation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::core::quote::tiers::{TruckTier, WeightTier};
use crate::core::quote::types::RouteType;

/// Kind of rate schedule
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigType {
    #[default]
    Default,
    Custom,
    Premium,
    Economy,
}

/// One rate schedule version
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    pub id: String,
    pub client_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub config_type: ConfigType,
    pub active: bool,
    pub version: String,
    pub currency_code: String,
    pub currency_symbol: String,
    /// Decimal precision applied to every line item and the total
    pub decimal_places: u32,
    /// Flat per-day amount by truck-size tier
    pub base_rates: HashMap<TruckTier, f64>,
    /// Amount per kilometer by route type
    pub distance_rates: HashMap<RouteType, f64>,
    /// Flat surcharge amount by weight tier
    pub weight_rates: HashMap<WeightTier, f64>,
    pub special_handling_rates: SpecialHandlingRates,
    /// Percentages in [0.0, 1.0] applied against the pre-surcharge subtotal
    pub surcharges: SurchargeRates,
    pub additional_costs: AdditionalCosts,
}

/// Flat special-handling amounts. Refrigeration, special equipment and
/// escort are per-day; urgent is a one-time charge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SpecialHandlingRates {
    pub refrigeration: f64,
    pub special_equipment: f64,
    pub escort: f64,
    pub urgent: f64,
}

/// Percentage surcharges against the pre-surcharge subtotal
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SurchargeRates {
    pub fuel: f64,
    pub peak_hour: f64,
    pub weekend: f64,
    pub holiday: f64,
    pub overtime: f64,
}

/// Additional cost rules applied after surcharges
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdditionalCosts {
    /// Percentage of subtotal
    pub insurance_rate: f64,
    /// Flat toll amount by route type
    pub toll_rates: HashMap<RouteType, f64>,
    /// Flat fee multiplied by billable duration days
    pub parking_fee_per_day: f64,
}

impl PricingConfig {
    /// System-default rate schedule used when a client has no active
    /// config of its own.
    pub fn system_default(client_id: &str) -> Self {
        Self {
            id: format!("default-{client_id}"),
            client_id: client_id.to_string(),
            name: "System default".to_string(),
            config_type: ConfigType::Default,
            active: true,
            version: "1.0".to_string(),
            currency_code: "PHP".to_string(),
            currency_symbol: "\u{20b1}".to_string(),
            decimal_places: 2,
            base_rates: HashMap::from([
                (TruckTier::Small, 3000.0),
                (TruckTier::Medium, 5000.0),
                (TruckTier::Large, 8000.0),
                (TruckTier::Heavy, 12000.0),
            ]),
            distance_rates: HashMap::from([
                (RouteType::Local, 50.0),
                (RouteType::Provincial, 35.0),
                (RouteType::Intercity, 25.0),
            ]),
            weight_rates: HashMap::from([
                (WeightTier::Light, 0.0),
                (WeightTier::Medium, 500.0),
                (WeightTier::Heavy, 1200.0),
                (WeightTier::VeryHeavy, 2500.0),
            ]),
            special_handling_rates: SpecialHandlingRates {
                refrigeration: 800.0,
                special_equipment: 600.0,
                escort: 1000.0,
                urgent: 1500.0,
            },
            surcharges: SurchargeRates {
                fuel: 0.05,
                peak_hour: 0.10,
                weekend: 0.08,
                holiday: 0.15,
                overtime: 0.10,
            },
            additional_costs: AdditionalCosts {
                insurance_rate: 0.02,
                toll_rates: HashMap::from([
                    (RouteType::Local, 0.0),
                    (RouteType::Provincial, 150.0),
                    (RouteType::Intercity, 300.0),
                ]),
                parking_fee_per_day: 200.0,
            },
        }
    }
}
