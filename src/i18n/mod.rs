//! Internationalization module
//!
//! Provides translations for English (en) and French (fr).
//! Supports automatic language detection based on system locale.

mod en;
mod fr;

use crate::calculator::BASE_LABEL;
use crate::core::{Appliance, ValidationError};
use std::collections::HashMap;

/// Number of energy saving tips in each language
const TIP_COUNT: usize = 5;

/// Internationalization manager
pub struct I18n {
    translations: HashMap<String, String>,
}

impl I18n {
    /// Create a new I18n instance with the specified language
    pub fn new(lang: &str) -> Self {
        let mut i18n = Self {
            translations: HashMap::new(),
        };
        i18n.set_language(lang);
        i18n
    }

    /// Set the current language
    pub fn set_language(&mut self, lang: &str) {
        let lang = if lang == "auto" {
            detect_system_language()
        } else {
            lang.to_string()
        };

        self.translations = match lang.as_str() {
            "fr" => fr::get_translations(),
            _ => en::get_translations(),
        };
        log::debug!("Language set to: {}", if lang == "fr" { "fr" } else { "en" });
    }

    /// Get a translated string by key
    pub fn get(&self, key: &str) -> String {
        self.translations
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// Energy saving tips in display order
    pub fn tips(&self) -> Vec<String> {
        (1..=TIP_COUNT).map(|i| self.get(&format!("tips.{}", i))).collect()
    }

    /// Translate a breakdown category label
    pub fn category_label(&self, label: &str) -> String {
        if label == BASE_LABEL {
            return self.get("breakdown.base");
        }
        Appliance::all()
            .iter()
            .find(|a| a.label() == label)
            .map(|a| self.get(a.label_key()))
            .unwrap_or_else(|| label.to_string())
    }

    /// User-facing message for a rejected submission
    pub fn validation_message(&self, err: &ValidationError) -> String {
        let fields = err
            .missing_fields()
            .iter()
            .map(|f| self.get(f.label_key()))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}: {}", self.get("form.missing"), fields)
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new("auto")
    }
}

/// Detect system language from the locale environment variables
fn detect_system_language() -> String {
    let lang_env = std::env::var("LANG")
        .or_else(|_| std::env::var("LC_ALL"))
        .or_else(|_| std::env::var("LC_MESSAGES"))
        .unwrap_or_else(|_| "en".to_string());

    language_from_locale(&lang_env).to_string()
}

/// Extract a supported language code (e.g., "fr_FR.UTF-8" -> "fr")
fn language_from_locale(locale: &str) -> &'static str {
    let code = locale
        .split(['_', '.', '-'])
        .next()
        .unwrap_or("en");

    match code {
        "fr" => "fr",
        _ => "en",
    }
}
