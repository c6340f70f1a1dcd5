//! Common types used across the application

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of home the household lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DwellingType {
    Flat,
    #[serde(alias = "Tenament")]
    Tenement,
    Bungalow,
}

impl DwellingType {
    pub fn all() -> &'static [DwellingType] {
        &[DwellingType::Flat, DwellingType::Tenement, DwellingType::Bungalow]
    }

    pub fn label(&self) -> &'static str {
        match self {
            DwellingType::Flat => "Flat",
            DwellingType::Tenement => "Tenement",
            DwellingType::Bungalow => "Bungalow",
        }
    }

    /// Translation key for the label
    pub fn label_key(&self) -> &'static str {
        match self {
            DwellingType::Flat => "dwelling.flat",
            DwellingType::Tenement => "dwelling.tenement",
            DwellingType::Bungalow => "dwelling.bungalow",
        }
    }
}

impl fmt::Display for DwellingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for DwellingType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flat" => Ok(DwellingType::Flat),
            "tenement" | "tenament" => Ok(DwellingType::Tenement),
            "bungalow" => Ok(DwellingType::Bungalow),
            other => Err(format!(
                "unknown dwelling type '{}' (expected flat, tenement or bungalow)",
                other
            )),
        }
    }
}

/// Bedroom-Hall-Kitchen room configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomConfig {
    #[serde(rename = "1BHK")]
    OneBhk,
    #[serde(rename = "2BHK")]
    TwoBhk,
    #[serde(rename = "3BHK")]
    ThreeBhk,
}

impl RoomConfig {
    pub fn all() -> &'static [RoomConfig] {
        &[RoomConfig::OneBhk, RoomConfig::TwoBhk, RoomConfig::ThreeBhk]
    }

    pub fn label(&self) -> &'static str {
        match self {
            RoomConfig::OneBhk => "1BHK",
            RoomConfig::TwoBhk => "2BHK",
            RoomConfig::ThreeBhk => "3BHK",
        }
    }

    /// Number of lights and of fans assumed for this configuration
    pub fn fixture_count(&self) -> u32 {
        match self {
            RoomConfig::OneBhk => 2,
            RoomConfig::TwoBhk => 3,
            RoomConfig::ThreeBhk => 4,
        }
    }
}

impl fmt::Display for RoomConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for RoomConfig {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "1bhk" | "1" => Ok(RoomConfig::OneBhk),
            "2bhk" | "2" => Ok(RoomConfig::TwoBhk),
            "3bhk" | "3" => Ok(RoomConfig::ThreeBhk),
            _ => Err(format!(
                "unknown house configuration '{}' (expected 1BHK, 2BHK or 3BHK)",
                s.trim()
            )),
        }
    }
}

/// Major appliances that add a fixed monthly load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Appliance {
    AirConditioner,
    Refrigerator,
    WashingMachine,
}

impl Appliance {
    /// Appliances in breakdown order
    pub fn all() -> &'static [Appliance] {
        &[
            Appliance::AirConditioner,
            Appliance::Refrigerator,
            Appliance::WashingMachine,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Appliance::AirConditioner => "Air Conditioner",
            Appliance::Refrigerator => "Refrigerator",
            Appliance::WashingMachine => "Washing Machine",
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            Appliance::AirConditioner => "appliance.ac",
            Appliance::Refrigerator => "appliance.fridge",
            Appliance::WashingMachine => "appliance.washing_machine",
        }
    }
}

/// Validated household description, immutable once built
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseholdInput {
    pub name: String,
    pub age: u32,
    pub city: String,
    pub area: String,
    pub dwelling_type: DwellingType,
    pub room_config: RoomConfig,
    pub has_ac: bool,
    pub has_fridge: bool,
    pub has_washing_machine: bool,
}

impl HouseholdInput {
    /// Whether the given appliance is present
    pub fn has(&self, appliance: Appliance) -> bool {
        match appliance {
            Appliance::AirConditioner => self.has_ac,
            Appliance::Refrigerator => self.has_fridge,
            Appliance::WashingMachine => self.has_washing_machine,
        }
    }

    /// Present appliances in breakdown order
    pub fn appliances(&self) -> Vec<Appliance> {
        Appliance::all()
            .iter()
            .copied()
            .filter(|a| self.has(*a))
            .collect()
    }
}

/// One line of a consumption breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownItem {
    pub label: String,
    pub kwh: f64,
}

/// Monthly consumption split by category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumptionBreakdown {
    /// Lighting and fans load in kWh per month
    pub base_kwh: f64,
    /// Present appliances in fixed order
    pub per_appliance: Vec<BreakdownItem>,
}

impl ConsumptionBreakdown {
    /// Total monthly consumption in kWh
    pub fn total_kwh(&self) -> f64 {
        self.base_kwh + self.per_appliance.iter().map(|i| i.kwh).sum::<f64>()
    }

    /// Average daily consumption in kWh
    pub fn daily_kwh(&self) -> f64 {
        self.total_kwh() / crate::calculator::DAYS_PER_MONTH
    }

    /// All categories, base load first
    pub fn items(&self) -> Vec<BreakdownItem> {
        let mut items = Vec::with_capacity(self.per_appliance.len() + 1);
        items.push(BreakdownItem {
            label: crate::calculator::BASE_LABEL.to_string(),
            kwh: self.base_kwh,
        });
        items.extend(self.per_appliance.iter().cloned());
        items
    }

    /// Percentage of the total per category, same order as `items()`
    pub fn shares(&self) -> Vec<(String, f64)> {
        let total = self.total_kwh();
        self.items()
            .into_iter()
            .map(|item| {
                let pct = if total > 0.0 { item.kwh / total * 100.0 } else { 0.0 };
                (item.label, pct)
            })
            .collect()
    }
}

/// A successful form submission and its computed result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub input: HouseholdInput,
    pub breakdown: ConsumptionBreakdown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_config_parsing_aliases() {
        assert_eq!("1BHK".parse::<RoomConfig>().unwrap(), RoomConfig::OneBhk);
        assert_eq!("2 bhk".parse::<RoomConfig>().unwrap(), RoomConfig::TwoBhk);
        assert_eq!(" 3 ".parse::<RoomConfig>().unwrap(), RoomConfig::ThreeBhk);
        assert!("4BHK".parse::<RoomConfig>().is_err());
    }

    #[test]
    fn test_dwelling_type_parsing_accepts_misspelling() {
        assert_eq!("Tenament".parse::<DwellingType>().unwrap(), DwellingType::Tenement);
        assert_eq!("FLAT".parse::<DwellingType>().unwrap(), DwellingType::Flat);
        assert!("castle".parse::<DwellingType>().is_err());
    }

    #[test]
    fn test_enum_serde_uses_display_names() {
        let json = serde_json::to_string(&RoomConfig::TwoBhk).unwrap();
        assert_eq!(json, "\"2BHK\"");

        let dwelling: DwellingType = serde_json::from_str("\"Tenament\"").unwrap();
        assert_eq!(dwelling, DwellingType::Tenement);
    }

    #[test]
    fn test_shares_sum_to_hundred() {
        let breakdown = ConsumptionBreakdown {
            base_kwh: 72.0,
            per_appliance: vec![
                BreakdownItem { label: "Air Conditioner".into(), kwh: 90.0 },
                BreakdownItem { label: "Refrigerator".into(), kwh: 120.0 },
            ],
        };

        let shares = breakdown.shares();
        assert_eq!(shares.len(), 3);
        let sum: f64 = shares.iter().map(|(_, pct)| pct).sum();
        assert!((sum - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_shares_of_empty_breakdown_are_zero() {
        let breakdown = ConsumptionBreakdown { base_kwh: 0.0, per_appliance: Vec::new() };
        assert_eq!(breakdown.shares(), vec![("Base Lighting & Fans".to_string(), 0.0)]);
    }
}
