//! Form state and submission
//!
//! The UI owns a [`FormSession`]: raw, possibly incomplete field values plus
//! the last successful result. Submitting validates the raw values into an
//! immutable [`HouseholdInput`] and runs the calculator on it.

use crate::calculator::compute_consumption;
use crate::core::{
    Appliance, DwellingType, Field, FormConfig, HouseholdInput, RoomConfig, Submission,
    ValidationError, MAX_AGE, MIN_AGE,
};

/// Raw form values as entered by the user
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub name: String,
    pub age: u32,
    pub city: String,
    pub area: String,
    pub dwelling_type: Option<DwellingType>,
    pub room_config: Option<RoomConfig>,
    pub has_ac: bool,
    pub has_fridge: bool,
    pub has_washing_machine: bool,
}

impl FormState {
    /// Empty form with the configured default age
    pub fn new(config: &FormConfig) -> Self {
        Self {
            name: String::new(),
            age: config.default_age.clamp(MIN_AGE, MAX_AGE),
            city: String::new(),
            area: String::new(),
            dwelling_type: None,
            room_config: None,
            has_ac: false,
            has_fridge: false,
            has_washing_machine: false,
        }
    }

    /// Set the age, clamped into the accepted range
    pub fn set_age(&mut self, age: u32) {
        self.age = age.clamp(MIN_AGE, MAX_AGE);
    }

    pub fn toggle(&mut self, appliance: Appliance) {
        match appliance {
            Appliance::AirConditioner => self.has_ac = !self.has_ac,
            Appliance::Refrigerator => self.has_fridge = !self.has_fridge,
            Appliance::WashingMachine => self.has_washing_machine = !self.has_washing_machine,
        }
    }

    pub fn has(&self, appliance: Appliance) -> bool {
        match appliance {
            Appliance::AirConditioner => self.has_ac,
            Appliance::Refrigerator => self.has_fridge,
            Appliance::WashingMachine => self.has_washing_machine,
        }
    }

    /// Required fields that are empty or unselected, in form order
    pub fn missing_fields(&self) -> Vec<Field> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push(Field::Name);
        }
        if self.city.trim().is_empty() {
            missing.push(Field::City);
        }
        if self.area.trim().is_empty() {
            missing.push(Field::Area);
        }
        if self.dwelling_type.is_none() {
            missing.push(Field::DwellingType);
        }
        if self.room_config.is_none() {
            missing.push(Field::RoomConfig);
        }
        missing
    }

    /// Build the immutable input, or report every missing field
    pub fn validate(&self) -> Result<HouseholdInput, ValidationError> {
        let missing = self.missing_fields();

        match (self.dwelling_type, self.room_config) {
            (Some(dwelling_type), Some(room_config)) if missing.is_empty() => Ok(HouseholdInput {
                name: self.name.trim().to_string(),
                age: self.age.clamp(MIN_AGE, MAX_AGE),
                city: self.city.trim().to_string(),
                area: self.area.trim().to_string(),
                dwelling_type,
                room_config,
                has_ac: self.has_ac,
                has_fridge: self.has_fridge,
                has_washing_machine: self.has_washing_machine,
            }),
            _ => Err(ValidationError::MissingFields(missing)),
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(&FormConfig::default())
    }
}

/// Per-session form state plus the last successful result
#[derive(Debug, Clone, Default)]
pub struct FormSession {
    pub form: FormState,
    result: Option<Submission>,
}

impl FormSession {
    pub fn new(config: &FormConfig) -> Self {
        Self {
            form: FormState::new(config),
            result: None,
        }
    }

    /// Validate and compute.
    ///
    /// On failure the previous result, if any, stays in place.
    pub fn submit(&mut self) -> Result<&Submission, ValidationError> {
        let input = match self.form.validate() {
            Ok(input) => input,
            Err(e) => {
                log::debug!("Submission rejected: {}", e);
                return Err(e);
            }
        };

        let breakdown = compute_consumption(&input);
        log::info!(
            "Calculated {:.1} kWh/month for {}",
            breakdown.total_kwh(),
            input.name
        );
        Ok(&*self.result.insert(Submission { input, breakdown }))
    }

    /// Drop the current result and go back to editing ("calculate again")
    pub fn reset(&mut self) {
        self.result = None;
    }

    pub fn result(&self) -> Option<&Submission> {
        self.result.as_ref()
    }

    pub fn is_calculated(&self) -> bool {
        self.result.is_some()
    }
}
