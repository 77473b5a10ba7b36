//! Request and breakdown types for quote calculation

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::utils::error::{QuoteError, Result};

/// Route type, indexing into per-kilometer and toll rate tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteType {
    Local,
    Provincial,
    Intercity,
}

impl RouteType {
    pub const ALL: [RouteType; 3] = [RouteType::Local, RouteType::Provincial, RouteType::Intercity];

    pub fn as_str(&self) -> &'static str {
        match self {
            RouteType::Local => "local",
            RouteType::Provincial => "provincial",
            RouteType::Intercity => "intercity",
        }
    }
}

/// Unit of the `cargo_weight` field; normalized to kilograms before tier
/// lookup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CargoUnit {
    #[default]
    Kilograms,
    Tons,
}

/// One pricing inquiry. Ephemeral; the engine never persists it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipmentRequest {
    pub truck_capacity_tons: f64,
    pub cargo_weight: f64,
    #[serde(default)]
    pub cargo_unit: CargoUnit,
    pub distance_km: f64,
    pub route_type: RouteType,
    /// Absent timestamps mean the corresponding temporal surcharges and
    /// duration components do not apply; they are not an error.
    #[serde(default)]
    pub pickup_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub delivery_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub requires_refrigeration: bool,
    #[serde(default)]
    pub requires_special_equipment: bool,
    #[serde(default)]
    pub requires_escort: bool,
    #[serde(default)]
    pub is_urgent_delivery: bool,
}

impl ShipmentRequest {
    /// Cargo weight normalized to kilograms.
    pub fn cargo_weight_kg(&self) -> f64 {
        match self.cargo_unit {
            CargoUnit::Kilograms => self.cargo_weight,
            CargoUnit::Tons => self.cargo_weight * 1000.0,
        }
    }

    /// Reject malformed requests before any computation starts.
    pub fn validate(&self) -> Result<()> {
        ensure_non_negative(self.truck_capacity_tons, "truck_capacity_tons")?;
        ensure_non_negative(self.cargo_weight, "cargo_weight")?;
        ensure_non_negative(self.distance_km, "distance_km")?;

        if let (Some(pickup), Some(delivery)) = (self.pickup_at, self.delivery_at) {
            if delivery < pickup {
                return Err(QuoteError::invalid_request(format!(
                    "delivery_at ({delivery}) is before pickup_at ({pickup})"
                )));
            }
        }

        Ok(())
    }
}

fn ensure_non_negative(value: f64, field: &str) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(QuoteError::invalid_request(format!(
            "{field} must be a non-negative number, got {value}"
        )));
    }
    Ok(())
}

/// Itemized cost breakdown, immutable once produced.
///
/// Every line item is rounded independently at the config's decimal
/// precision; `estimated_cost` is rounded once from the full-precision sum
/// of the components, so it may differ from the sum of the rounded line
/// items by up to one unit in the last place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingBreakdown {
    pub base_rate: f64,
    pub distance_rate: f64,
    pub weight_rate: f64,
    pub special_handling_rate: f64,
    pub fuel_surcharge: f64,
    pub peak_hour_surcharge: f64,
    pub weekend_surcharge: f64,
    pub holiday_surcharge: f64,
    pub overtime_rate: f64,
    pub insurance_cost: f64,
    pub toll_fees: f64,
    pub parking_fees: f64,
    pub estimated_cost: f64,
    pub currency_code: String,
    pub duration_days: i64,
}
