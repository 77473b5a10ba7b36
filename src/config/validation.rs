//! Wholesale configuration validation
//!
//! The store side rejects structurally incomplete or out-of-range configs
//! before they can be activated; the calculator still defends per-lookup
//! against missing keys. Exactly the four named keys must exist in each
//! tiered mapping and all three route keys in route-indexed mappings, with
//! no partial tables.

use std::collections::HashMap;
use std::hash::Hash;

use tracing::debug;

use crate::config::pricing::PricingConfig;
use crate::core::quote::tiers::{TruckTier, WeightTier};
use crate::core::quote::types::RouteType;

/// Validation trait for configuration structures
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

impl Validate for PricingConfig {
    fn validate(&self) -> Result<(), String> {
        debug!(config = %self.id, "validating pricing configuration");

        if self.id.is_empty() {
            return Err("config id cannot be empty".to_string());
        }
        if self.client_id.is_empty() {
            return Err("client_id cannot be empty".to_string());
        }
        if self.currency_code.is_empty() {
            return Err("currency_code cannot be empty".to_string());
        }
        if self.decimal_places > 8 {
            return Err(format!(
                "decimal_places {} exceeds supported precision (8)",
                self.decimal_places
            ));
        }

        check_complete(&self.base_rates, &TruckTier::ALL, TruckTier::as_str, "base_rates")?;
        check_complete(
            &self.distance_rates,
            &RouteType::ALL,
            RouteType::as_str,
            "distance_rates",
        )?;
        check_complete(
            &self.weight_rates,
            &WeightTier::ALL,
            WeightTier::as_str,
            "weight_rates",
        )?;
        check_complete(
            &self.additional_costs.toll_rates,
            &RouteType::ALL,
            RouteType::as_str,
            "additional_costs.toll_rates",
        )?;

        let handling = &self.special_handling_rates;
        check_amount(handling.refrigeration, "special_handling_rates.refrigeration")?;
        check_amount(handling.special_equipment, "special_handling_rates.special_equipment")?;
        check_amount(handling.escort, "special_handling_rates.escort")?;
        check_amount(handling.urgent, "special_handling_rates.urgent")?;

        let surcharges = &self.surcharges;
        check_amount(surcharges.fuel, "surcharges.fuel")?;
        check_amount(surcharges.peak_hour, "surcharges.peak_hour")?;
        check_amount(surcharges.weekend, "surcharges.weekend")?;
        check_amount(surcharges.holiday, "surcharges.holiday")?;
        check_amount(surcharges.overtime, "surcharges.overtime")?;

        check_amount(self.additional_costs.insurance_rate, "additional_costs.insurance_rate")?;
        check_amount(
            self.additional_costs.parking_fee_per_day,
            "additional_costs.parking_fee_per_day",
        )?;

        debug!(config = %self.id, "pricing configuration valid");
        Ok(())
    }
}

fn check_complete<K: Eq + Hash + Copy>(
    table: &HashMap<K, f64>,
    required: &[K],
    key_name: fn(&K) -> &'static str,
    table_name: &str,
) -> Result<(), String> {
    for key in required {
        match table.get(key) {
            None => {
                return Err(format!("{table_name} is missing key '{}'", key_name(key)));
            }
            Some(&value) => {
                check_amount(value, &format!("{table_name}.{}", key_name(key)))?;
            }
        }
    }
    Ok(())
}

fn check_amount(value: f64, field: &str) -> Result<(), String> {
    if !value.is_finite() || value < 0.0 {
        return Err(format!("{field} must be a non-negative number, got {value}"));
    }
    Ok(())
}
