//! Truck-size and cargo-weight tier classifiers
//!
//! Both classifiers are pure, total functions: every real input maps to
//! exactly one tier, so there is no error path. Out-of-range low values
//! clamp to the smallest tier rather than being rejected.

use serde::{Deserialize, Serialize};

/// Truck-size tier, selected from capacity in tons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TruckTier {
    Small,
    Medium,
    Large,
    Heavy,
}

impl TruckTier {
    pub const ALL: [TruckTier; 4] = [
        TruckTier::Small,
        TruckTier::Medium,
        TruckTier::Large,
        TruckTier::Heavy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TruckTier::Small => "small",
            TruckTier::Medium => "medium",
            TruckTier::Large => "large",
            TruckTier::Heavy => "heavy",
        }
    }
}

/// Cargo-weight tier, selected from weight in kilograms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightTier {
    Light,
    Medium,
    Heavy,
    VeryHeavy,
}

impl WeightTier {
    pub const ALL: [WeightTier; 4] = [
        WeightTier::Light,
        WeightTier::Medium,
        WeightTier::Heavy,
        WeightTier::VeryHeavy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WeightTier::Light => "light",
            WeightTier::Medium => "medium",
            WeightTier::Heavy => "heavy",
            WeightTier::VeryHeavy => "very_heavy",
        }
    }
}

/// Classify truck capacity into a size tier.
///
/// Brackets are inclusive at the upper bound: small (-inf, 3], medium (3, 8],
/// large (8, 15], heavy (15, inf). A sub-1-ton request is still a valid
/// small job, so low values clamp to `Small`.
pub fn classify_truck_tier(capacity_tons: f64) -> TruckTier {
    if capacity_tons <= 3.0 {
        TruckTier::Small
    } else if capacity_tons <= 8.0 {
        TruckTier::Medium
    } else if capacity_tons <= 15.0 {
        TruckTier::Large
    } else {
        TruckTier::Heavy
    }
}

/// Classify cargo weight (kilograms) into a weight tier.
///
/// Brackets are left-closed: light [0, 500), medium [500, 1000),
/// heavy [1000, 2000), very_heavy [2000, inf). Bracket edges belong to the
/// higher tier.
pub fn classify_weight_tier(weight_kg: f64) -> WeightTier {
    if weight_kg < 500.0 {
        WeightTier::Light
    } else if weight_kg < 1000.0 {
        WeightTier::Medium
    } else if weight_kg < 2000.0 {
        WeightTier::Heavy
    } else {
        WeightTier::VeryHeavy
    }
}
