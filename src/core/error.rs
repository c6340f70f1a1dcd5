//! Error types for the application

use std::fmt;
use thiserror::Error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Terminal UI error: {0}")]
    Tui(String),
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

/// A form field that can be reported as missing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    City,
    Area,
    DwellingType,
    RoomConfig,
}

impl Field {
    /// Translation key for the field label
    pub fn label_key(&self) -> &'static str {
        match self {
            Field::Name => "form.name",
            Field::City => "form.city",
            Field::Area => "form.area",
            Field::DwellingType => "form.dwelling",
            Field::RoomConfig => "form.rooms",
        }
    }

    /// English label, used for error display
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::City => "city",
            Field::Area => "area",
            Field::DwellingType => "dwelling type",
            Field::RoomConfig => "house configuration",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Rejected form submission
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more required fields are empty or unselected, in form order
    #[error("Please fill in all required fields (missing: {})", join_fields(.0))]
    MissingFields(Vec<Field>),
}

impl ValidationError {
    pub fn missing_fields(&self) -> &[Field] {
        match self {
            ValidationError::MissingFields(fields) => fields,
        }
    }
}

fn join_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_message_lists_fields() {
        let err = ValidationError::MissingFields(vec![Field::Name, Field::RoomConfig]);
        assert_eq!(
            err.to_string(),
            "Please fill in all required fields (missing: name, house configuration)"
        );
    }

    #[test]
    fn test_validation_converts_into_app_error() {
        let err: Error = ValidationError::MissingFields(vec![Field::City]).into();
        assert!(matches!(err, Error::Validation(_)));
        assert!(err.to_string().contains("city"));
    }
}
