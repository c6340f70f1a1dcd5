//! Pricing engine for electricity cost estimates
//!
//! Supports multiple pricing modes:
//! - Simple: flat rate per kWh
//! - Peak/Off-peak: peak and off-peak rates blended by the off-peak share
//! - Seasonal: different rates by season (summer/winter)

use crate::core::{ConsumptionBreakdown, PricingConfig};
use chrono::{Datelike, Local};
use serde::Serialize;

/// Cost of a monthly breakdown at a given rate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostEstimate {
    /// Rate per kWh used
    pub rate: f64,
    pub currency: String,
    pub currency_symbol: String,
    pub monthly_cost: f64,
    pub daily_cost: f64,
    /// Cost per breakdown category, same order as `ConsumptionBreakdown::items()`
    pub per_item: Vec<(String, f64)>,
}

/// Pricing engine that calculates electricity costs
pub struct PricingEngine {
    config: PricingConfig,
}

impl PricingEngine {
    /// Create a new pricing engine with the given configuration
    pub fn new(config: &PricingConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Whether cost estimates should be shown at all
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Get the rate per kWh for the current local month
    pub fn current_rate(&self) -> f64 {
        self.rate_for_month(Local::now().month())
    }

    /// Get the rate per kWh for a month (1-12); only seasonal mode depends on it
    pub fn rate_for_month(&self, month: u32) -> f64 {
        match self.config.mode.as_str() {
            "simple" => self.config.simple.rate_per_kwh,
            "peak_offpeak" => self.blended_peak_offpeak_rate(),
            "seasonal" => self.seasonal_rate(month),
            other => {
                log::warn!("Unknown pricing mode '{}', using simple rate", other);
                self.config.simple.rate_per_kwh
            }
        }
    }

    /// Estimate the cost of a monthly breakdown for the current month
    pub fn estimate(&self, breakdown: &ConsumptionBreakdown) -> CostEstimate {
        self.estimate_for_month(breakdown, Local::now().month())
    }

    /// Estimate the cost of a monthly breakdown for a given month
    pub fn estimate_for_month(&self, breakdown: &ConsumptionBreakdown, month: u32) -> CostEstimate {
        let rate = self.rate_for_month(month);
        let monthly_cost = breakdown.total_kwh() * rate;

        CostEstimate {
            rate,
            currency: self.config.currency.clone(),
            currency_symbol: self.config.currency_symbol.clone(),
            monthly_cost,
            daily_cost: breakdown.daily_kwh() * rate,
            per_item: breakdown
                .items()
                .into_iter()
                .map(|item| (item.label, item.kwh * rate))
                .collect(),
        }
    }

    fn blended_peak_offpeak_rate(&self) -> f64 {
        let p = &self.config.peak_offpeak;
        let share = p.offpeak_share.clamp(0.0, 1.0);
        share * p.offpeak_rate + (1.0 - share) * p.peak_rate
    }

    fn seasonal_rate(&self, month: u32) -> f64 {
        if self.config.seasonal.winter_months.contains(&month) {
            self.config.seasonal.winter_rate
        } else {
            self.config.seasonal.summer_rate
        }
    }
}
