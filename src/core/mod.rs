//! Core module - Household types, configuration, and errors

mod config;
mod error;
mod types;

pub use config::{Config, FormConfig, GeneralConfig, PeakOffpeakPricing, PricingConfig, SeasonalPricing, SimplePricing, MAX_AGE, MIN_AGE};
pub use error::{Error, Field, Result, ValidationError};
pub use types::{Appliance, BreakdownItem, ConsumptionBreakdown, DwellingType, HouseholdInput, RoomConfig, Submission};
