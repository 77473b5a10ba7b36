//! Quote calculator
//!
//! Pure cost calculation: one resolved, immutable `PricingConfig` snapshot
//! plus one `ShipmentRequest` in, one itemized `PricingBreakdown` out.
//! Evaluation order is fixed; each step reads only previously computed
//! values plus the config. No side effects, no I/O.

use std::collections::HashMap;
use std::hash::Hash;

use crate::config::PricingConfig;
use crate::core::quote::rounding::round_half_up;
use crate::core::quote::surcharge::{self, HolidayCalendar};
use crate::core::quote::tiers::{classify_truck_tier, classify_weight_tier};
use crate::core::quote::types::{PricingBreakdown, ShipmentRequest};
use crate::utils::error::{QuoteError, Result};

/// Price a shipment against a resolved rate configuration.
///
/// Fails with [`QuoteError::InvalidRequest`] on malformed requests and with
/// [`QuoteError::ConfigIncomplete`] when the rate-table entry for the tier
/// or route actually needed is absent. A missing key is a configuration
/// bug, never a zero-cost case. Errors never produce a partial breakdown.
pub fn price_shipment(
    config: &PricingConfig,
    request: &ShipmentRequest,
    calendar: &dyn HolidayCalendar,
) -> Result<PricingBreakdown> {
    request.validate()?;

    let truck_tier = classify_truck_tier(request.truck_capacity_tons);
    let weight_tier = classify_weight_tier(request.cargo_weight_kg());

    let base_rate = required_rate(&config.base_rates, truck_tier, "base_rates", truck_tier.as_str())?;
    let distance_rate = required_rate(
        &config.distance_rates,
        request.route_type,
        "distance_rates",
        request.route_type.as_str(),
    )? * request.distance_km;
    let weight_rate = required_rate(
        &config.weight_rates,
        weight_tier,
        "weight_rates",
        weight_tier.as_str(),
    )?;

    let temporal = surcharge::evaluate(request.pickup_at, request.delivery_at, calendar);
    let duration = temporal.duration_days as f64;

    let handling = &config.special_handling_rates;
    let mut special_handling_rate = 0.0;
    if request.requires_refrigeration {
        special_handling_rate += handling.refrigeration * duration;
    }
    if request.requires_special_equipment {
        special_handling_rate += handling.special_equipment * duration;
    }
    if request.requires_escort {
        special_handling_rate += handling.escort * duration;
    }
    if request.is_urgent_delivery {
        // One-time, not per-day
        special_handling_rate += handling.urgent;
    }

    let subtotal = base_rate + distance_rate + weight_rate + special_handling_rate;

    // Every percentage applies against the pre-surcharge subtotal; surcharges
    // never compound on each other.
    let rates = &config.surcharges;
    let fuel_surcharge = subtotal * rates.fuel;
    let peak_hour_surcharge = if temporal.peak_hour {
        subtotal * rates.peak_hour
    } else {
        0.0
    };
    let weekend_surcharge = if temporal.weekend {
        subtotal * rates.weekend
    } else {
        0.0
    };
    let holiday_surcharge = if temporal.holiday {
        subtotal * rates.holiday
    } else {
        0.0
    };
    let overtime_rate = if temporal.overtime {
        subtotal * rates.overtime
    } else {
        0.0
    };

    let additional = &config.additional_costs;
    let insurance_cost = subtotal * additional.insurance_rate;
    let toll_fees = required_rate(
        &additional.toll_rates,
        request.route_type,
        "additional_costs.toll_rates",
        request.route_type.as_str(),
    )?;
    let parking_fees = additional.parking_fee_per_day * duration;

    // The total is rounded once from full-precision intermediates, not
    // re-summed from the independently rounded line items.
    let estimated_cost = subtotal
        + fuel_surcharge
        + peak_hour_surcharge
        + weekend_surcharge
        + holiday_surcharge
        + overtime_rate
        + insurance_cost
        + toll_fees
        + parking_fees;

    let dp = config.decimal_places;
    Ok(PricingBreakdown {
        base_rate: round_half_up(base_rate, dp),
        distance_rate: round_half_up(distance_rate, dp),
        weight_rate: round_half_up(weight_rate, dp),
        special_handling_rate: round_half_up(special_handling_rate, dp),
        fuel_surcharge: round_half_up(fuel_surcharge, dp),
        peak_hour_surcharge: round_half_up(peak_hour_surcharge, dp),
        weekend_surcharge: round_half_up(weekend_surcharge, dp),
        holiday_surcharge: round_half_up(holiday_surcharge, dp),
        overtime_rate: round_half_up(overtime_rate, dp),
        insurance_cost: round_half_up(insurance_cost, dp),
        toll_fees: round_half_up(toll_fees, dp),
        parking_fees: round_half_up(parking_fees, dp),
        estimated_cost: round_half_up(estimated_cost, dp),
        currency_code: config.currency_code.clone(),
        duration_days: temporal.duration_days,
    })
}

/// Look up a required rate-table entry.
fn required_rate<K: Eq + Hash>(
    table: &HashMap<K, f64>,
    key: K,
    table_name: &'static str,
    key_name: &'static str,
) -> Result<f64> {
    table
        .get(&key)
        .copied()
        .ok_or_else(|| QuoteError::config_incomplete(table_name, key_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::pricing::{AdditionalCosts, SpecialHandlingRates, SurchargeRates};
    use crate::config::{ConfigType, PricingConfig};
    use crate::core::quote::tiers::{TruckTier, WeightTier};
    use crate::core::quote::types::{CargoUnit, RouteType};
    use chrono::{NaiveDate, NaiveDateTime};
    use std::collections::HashMap;

    struct NoHoliday;

    impl HolidayCalendar for NoHoliday {
        fn is_holiday(&self, _date: chrono::NaiveDate) -> bool {
            false
        }
    }

    struct EveryDayHoliday;

    impl HolidayCalendar for EveryDayHoliday {
        fn is_holiday(&self, _date: chrono::NaiveDate) -> bool {
            true
        }
    }

    fn ts(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    /// Rate schedule from the reference scenario: medium base 5000, local
    /// 50/km, medium weight 500, all surcharges zero, 2% insurance, free
    /// local tolls, 200/day parking.
    fn scenario_config() -> PricingConfig {
        PricingConfig {
            id: "cfg-1".to_string(),
            client_id: "client-1".to_string(),
            name: "reference schedule".to_string(),
            config_type: ConfigType::Custom,
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
                fuel: 0.0,
                peak_hour: 0.0,
                weekend: 0.0,
                holiday: 0.0,
                overtime: 0.0,
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

    fn scenario_request() -> ShipmentRequest {
        ShipmentRequest {
            truck_capacity_tons: 5.0,
            cargo_weight: 800.0,
            cargo_unit: CargoUnit::Kilograms,
            distance_km: 50.0,
            route_type: RouteType::Local,
            pickup_at: Some(ts(2026, 3, 2, 10, 0)), // Monday, off-peak
            delivery_at: Some(ts(2026, 3, 2, 15, 0)),
            requires_refrigeration: false,
            requires_special_equipment: false,
            requires_escort: false,
            is_urgent_delivery: false,
        }
    }

    #[test]
    fn test_reference_scenario() {
        let breakdown =
            price_shipment(&scenario_config(), &scenario_request(), &NoHoliday).unwrap();

        assert_eq!(breakdown.base_rate, 5000.0);
        assert_eq!(breakdown.distance_rate, 2500.0);
        assert_eq!(breakdown.weight_rate, 500.0);
        assert_eq!(breakdown.special_handling_rate, 0.0);
        assert_eq!(breakdown.insurance_cost, 160.0); // 8000 * 0.02
        assert_eq!(breakdown.toll_fees, 0.0);
        assert_eq!(breakdown.parking_fees, 200.0);
        assert_eq!(breakdown.estimated_cost, 8360.0);
        assert_eq!(breakdown.duration_days, 1);
        assert_eq!(breakdown.currency_code, "PHP");
    }

    #[test]
    fn test_multi_day_duration_scenario() {
        let mut request = scenario_request();
        let mut config = scenario_config();
        config.surcharges.overtime = 0.10;

        // 50 hours -> ceil(50/24) = 3 billable days
        request.delivery_at = Some(ts(2026, 3, 4, 12, 0));

        let breakdown = price_shipment(&config, &request, &NoHoliday).unwrap();
        assert_eq!(breakdown.duration_days, 3);
        assert_eq!(breakdown.parking_fees, 600.0);
        // Overtime applies once against the subtotal, not once per extra day
        assert_eq!(breakdown.overtime_rate, 800.0); // 8000 * 0.10
    }

    #[test]
    fn test_missing_rate_table_key_is_rejected() {
        let mut config = scenario_config();
        config.base_rates.remove(&TruckTier::Heavy);

        // Other tiers still resolve fine
        assert!(price_shipment(&config, &scenario_request(), &NoHoliday).is_ok());

        let mut request = scenario_request();
        request.truck_capacity_tons = 20.0;
        match price_shipment(&config, &request, &NoHoliday) {
            Err(QuoteError::ConfigIncomplete { table, key }) => {
                assert_eq!(table, "base_rates");
                assert_eq!(key, "heavy");
            }
            other => panic!("expected ConfigIncomplete, got {other:?}"),
        }
    }

    #[test]
    fn test_surcharge_independence() {
        // All surcharge percentages zero: total reduces to subtotal plus
        // insurance, tolls and parking.
        let breakdown =
            price_shipment(&scenario_config(), &scenario_request(), &NoHoliday).unwrap();
        let subtotal = breakdown.base_rate
            + breakdown.distance_rate
            + breakdown.weight_rate
            + breakdown.special_handling_rate;

        assert_eq!(breakdown.fuel_surcharge, 0.0);
        assert_eq!(breakdown.peak_hour_surcharge, 0.0);
        assert_eq!(breakdown.weekend_surcharge, 0.0);
        assert_eq!(breakdown.holiday_surcharge, 0.0);
        assert_eq!(breakdown.overtime_rate, 0.0);
        assert_eq!(
            breakdown.estimated_cost,
            subtotal + breakdown.insurance_cost + breakdown.toll_fees + breakdown.parking_fees
        );
    }

    #[test]
    fn test_surcharges_apply_against_subtotal_without_compounding() {
        let mut config = scenario_config();
        config.surcharges = SurchargeRates {
            fuel: 0.05,
            peak_hour: 0.10,
            weekend: 0.08,
            holiday: 0.15,
            overtime: 0.10,
        };

        let mut request = scenario_request();
        request.pickup_at = Some(ts(2026, 3, 7, 7, 30)); // Saturday, peak window
        request.delivery_at = Some(ts(2026, 3, 9, 12, 0)); // Monday, 3 days

        let breakdown = price_shipment(&config, &request, &EveryDayHoliday).unwrap();
        let subtotal = 8000.0;

        assert_eq!(breakdown.fuel_surcharge, subtotal * 0.05);
        assert_eq!(breakdown.peak_hour_surcharge, subtotal * 0.10);
        assert_eq!(breakdown.weekend_surcharge, subtotal * 0.08);
        assert_eq!(breakdown.holiday_surcharge, subtotal * 0.15);
        assert_eq!(breakdown.overtime_rate, subtotal * 0.10);

        // Non-compounding: each surcharge is subtotal * rate, so the total
        // is subtotal * (1 + sum of rates) + additional costs.
        let expected = subtotal * (1.0 + 0.05 + 0.10 + 0.08 + 0.15 + 0.10)
            + breakdown.insurance_cost
            + breakdown.toll_fees
            + breakdown.parking_fees;
        assert!((breakdown.estimated_cost - expected).abs() < 1e-9);
    }

    #[test]
    fn test_special_handling_per_day_and_one_time_urgent() {
        let mut request = scenario_request();
        request.requires_refrigeration = true;
        request.requires_escort = true;
        request.is_urgent_delivery = true;
        request.delivery_at = Some(ts(2026, 3, 4, 12, 0)); // 3 days

        let breakdown = price_shipment(&scenario_config(), &request, &NoHoliday).unwrap();
        // (800 + 1000) per day * 3 days + 1500 one-time urgent
        assert_eq!(breakdown.special_handling_rate, 1800.0 * 3.0 + 1500.0);
    }

    #[test]
    fn test_idempotence() {
        let config = scenario_config();
        let request = scenario_request();
        let first = price_shipment(&config, &request, &NoHoliday).unwrap();
        let second = price_shipment(&config, &request, &NoHoliday).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_distance_monotonicity() {
        let config = scenario_config();
        let mut request = scenario_request();
        let near = price_shipment(&config, &request, &NoHoliday).unwrap();

        request.distance_km += 10.0;
        let far = price_shipment(&config, &request, &NoHoliday).unwrap();

        assert!(far.distance_rate > near.distance_rate);
        assert!(far.estimated_cost > near.estimated_cost);
    }

    #[test]
    fn test_cost_ordering_invariant() {
        let breakdown =
            price_shipment(&scenario_config(), &scenario_request(), &NoHoliday).unwrap();
        let subtotal = breakdown.base_rate
            + breakdown.distance_rate
            + breakdown.weight_rate
            + breakdown.special_handling_rate;

        assert!(breakdown.estimated_cost >= subtotal);
        assert!(subtotal >= breakdown.base_rate);
        assert!(breakdown.base_rate >= 0.0);
    }

    #[test]
    fn test_cargo_weight_in_tons_is_normalized() {
        let mut request = scenario_request();
        request.cargo_weight = 0.8;
        request.cargo_unit = CargoUnit::Tons;

        // 0.8 t = 800 kg, still the medium weight tier
        let breakdown = price_shipment(&scenario_config(), &request, &NoHoliday).unwrap();
        assert_eq!(breakdown.weight_rate, 500.0);
    }

    #[test]
    fn test_invalid_request_fails_before_computation() {
        let mut request = scenario_request();
        request.distance_km = -5.0;
        assert!(matches!(
            price_shipment(&scenario_config(), &request, &NoHoliday),
            Err(QuoteError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_rounding_respects_decimal_places() {
        let mut config = scenario_config();
        config.decimal_places = 0;
        config.additional_costs.insurance_rate = 0.0213;

        let breakdown = price_shipment(&config, &scenario_request(), &NoHoliday).unwrap();
        // 8000 * 0.0213 = 170.4 -> 170 at zero decimals
        assert_eq!(breakdown.insurance_cost, 170.0);
        assert_eq!(breakdown.insurance_cost.fract(), 0.0);
        assert_eq!(breakdown.estimated_cost.fract(), 0.0);
    }
}
