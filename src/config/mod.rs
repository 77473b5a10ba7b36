//! Rate configuration models and validation

pub mod pricing;
pub mod validation;

pub use pricing::{
    AdditionalCosts, ConfigType, PricingConfig, SpecialHandlingRates, SurchargeRates,
};
pub use validation::Validate;
