//! Home Energy Calculator - Demo CLI
//!
//! Runs every dwelling type, room configuration and appliance combination
//! through the calculator and prints the resulting table.

use anyhow::{ensure, Result};

use home_energy_calc_lib::calculator::compute_consumption;
use home_energy_calc_lib::core::{DwellingType, HouseholdInput, PricingConfig, RoomConfig};
use home_energy_calc_lib::pricing::PricingEngine;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let pricing_config = PricingConfig::default();
    let pricing = PricingEngine::new(&pricing_config);

    println!("==============================================================");
    println!("   Home Energy Calculator - Demo");
    println!("==============================================================\n");
    println!(
        "  Rate: {}{:.2}/kWh ({})\n",
        pricing_config.currency_symbol,
        pricing.current_rate(),
        pricing_config.mode
    );

    println!("--------------------------------------------------------------");
    println!("  Dwelling  | Rooms | AC | Fridge | WM |  Total  |  Daily | Cost");
    println!("--------------------------------------------------------------");

    let mut cases = 0;
    for dwelling_type in DwellingType::all() {
        for room_config in RoomConfig::all() {
            for mask in 0u8..8 {
                let input = HouseholdInput {
                    name: "Demo".to_string(),
                    age: 30,
                    city: "Demo City".to_string(),
                    area: "Demo Area".to_string(),
                    dwelling_type: *dwelling_type,
                    room_config: *room_config,
                    has_ac: mask & 1 != 0,
                    has_fridge: mask & 2 != 0,
                    has_washing_machine: mask & 4 != 0,
                };

                let breakdown = compute_consumption(&input);
                let item_sum: f64 = breakdown.items().iter().map(|i| i.kwh).sum();
                ensure!(
                    (item_sum - breakdown.total_kwh()).abs() < 1e-9,
                    "breakdown sum {} does not match total {}",
                    item_sum,
                    breakdown.total_kwh()
                );

                let estimate = pricing.estimate(&breakdown);
                println!(
                    "  {:<9} | {:<5} | {:^2} | {:^6} | {:^2} | {:>7.1} | {:>6.2} | {}{:.2}",
                    dwelling_type,
                    room_config,
                    mark(input.has_ac),
                    mark(input.has_fridge),
                    mark(input.has_washing_machine),
                    breakdown.total_kwh(),
                    breakdown.daily_kwh(),
                    estimate.currency_symbol,
                    estimate.monthly_cost
                );
                cases += 1;
            }
        }
    }

    println!("--------------------------------------------------------------\n");
    println!("  {} combinations checked, breakdown sums match totals.\n", cases);
    Ok(())
}

fn mark(present: bool) -> &'static str {
    if present { "x" } else { "-" }
}
