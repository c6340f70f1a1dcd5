//! Monthly consumption calculator
//!
//! Fixed rule table:
//! - lighting and fans: N lights at 0.4 kWh/day plus N fans at 0.8 kWh/day,
//!   where N is 2, 3 or 4 for 1BHK, 2BHK or 3BHK
//! - appliances: AC 3 kWh/day, fridge 4 kWh/day, washing machine 2 kWh/day
//!
//! Every daily figure is scaled to a 30-day month.

use crate::core::{Appliance, BreakdownItem, ConsumptionBreakdown, HouseholdInput, RoomConfig};

/// Days in a billing month
pub const DAYS_PER_MONTH: f64 = 30.0;
/// Daily consumption of one light in kWh
pub const LIGHT_KWH_PER_DAY: f64 = 0.4;
/// Daily consumption of one fan in kWh
pub const FAN_KWH_PER_DAY: f64 = 0.8;
/// Breakdown label of the lighting and fans load
pub const BASE_LABEL: &str = "Base Lighting & Fans";

/// Daily consumption of an appliance in kWh
pub fn appliance_kwh_per_day(appliance: Appliance) -> f64 {
    match appliance {
        Appliance::AirConditioner => 3.0,
        Appliance::Refrigerator => 4.0,
        Appliance::WashingMachine => 2.0,
    }
}

/// Monthly consumption of an appliance in kWh
pub fn appliance_monthly_kwh(appliance: Appliance) -> f64 {
    round_kwh(appliance_kwh_per_day(appliance) * DAYS_PER_MONTH)
}

/// Monthly lighting and fans load for a room configuration
pub fn base_monthly_kwh(room_config: RoomConfig) -> f64 {
    let count = f64::from(room_config.fixture_count());
    round_kwh((count * LIGHT_KWH_PER_DAY + count * FAN_KWH_PER_DAY) * DAYS_PER_MONTH)
}

/// Compute the monthly breakdown for a household.
///
/// Pure: identical inputs always give identical results. The dwelling type
/// is informational and does not change the figures.
pub fn compute_consumption(input: &HouseholdInput) -> ConsumptionBreakdown {
    let base_kwh = base_monthly_kwh(input.room_config);

    let per_appliance = input
        .appliances()
        .into_iter()
        .map(|appliance| BreakdownItem {
            label: appliance.label().to_string(),
            kwh: appliance_monthly_kwh(appliance),
        })
        .collect();

    let breakdown = ConsumptionBreakdown { base_kwh, per_appliance };
    log::debug!(
        "Computed {:.1} kWh/month for {} with {} appliance(s)",
        breakdown.total_kwh(),
        input.room_config,
        breakdown.per_appliance.len()
    );
    breakdown
}

// Products like 0.4 * 2 carry binary noise; report to the hundredth of a kWh.
fn round_kwh(kwh: f64) -> f64 {
    (kwh * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DwellingType;

    fn household(room_config: RoomConfig) -> HouseholdInput {
        HouseholdInput {
            name: "Asha".into(),
            age: 25,
            city: "Surat".into(),
            area: "Adajan".into(),
            dwelling_type: DwellingType::Flat,
            room_config,
            has_ac: false,
            has_fridge: false,
            has_washing_machine: false,
        }
    }

    #[test]
    fn test_base_load_per_room_config() {
        assert_eq!(base_monthly_kwh(RoomConfig::OneBhk), 72.0);
        assert_eq!(base_monthly_kwh(RoomConfig::TwoBhk), 108.0);
        assert_eq!(base_monthly_kwh(RoomConfig::ThreeBhk), 144.0);
    }

    #[test]
    fn test_appliance_constants() {
        assert_eq!(appliance_monthly_kwh(Appliance::AirConditioner), 90.0);
        assert_eq!(appliance_monthly_kwh(Appliance::Refrigerator), 120.0);
        assert_eq!(appliance_monthly_kwh(Appliance::WashingMachine), 60.0);
    }

    #[test]
    fn test_one_bhk_without_appliances() {
        let breakdown = compute_consumption(&household(RoomConfig::OneBhk));
        assert_eq!(breakdown.total_kwh(), 72.0);
        assert!(breakdown.per_appliance.is_empty());
        assert!((breakdown.daily_kwh() - 2.4).abs() < 1e-9);
    }

    #[test]
    fn test_breakdown_order_is_fixed() {
        let mut input = household(RoomConfig::TwoBhk);
        input.has_washing_machine = true;
        input.has_ac = true;
        input.has_fridge = true;

        let labels: Vec<String> = compute_consumption(&input)
            .items()
            .into_iter()
            .map(|i| i.label)
            .collect();
        assert_eq!(
            labels,
            vec![BASE_LABEL, "Air Conditioner", "Refrigerator", "Washing Machine"]
        );
    }

    #[test]
    fn test_dwelling_type_does_not_change_result() {
        let mut flat = household(RoomConfig::ThreeBhk);
        flat.has_fridge = true;
        let mut bungalow = flat.clone();
        bungalow.dwelling_type = DwellingType::Bungalow;

        assert_eq!(compute_consumption(&flat), compute_consumption(&bungalow));
    }
}
