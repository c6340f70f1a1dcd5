//! Non-interactive commands

use std::io::Write;
use std::path::Path;

use super::args::{ConfigAction, EstimateArgs, OutputFormat};
use crate::core::{Config, Result};
use crate::form::FormSession;
use crate::i18n::I18n;
use crate::pricing::PricingEngine;
use crate::report::{self, Report};

/// Validate the flags like a form submission and print the result
pub fn run_estimate<W: Write>(args: &EstimateArgs, config: &Config, i18n: &I18n, out: &mut W) -> Result<()> {
    let mut session = FormSession::new(&config.form);
    session.form = args.to_form(&session.form);
    let submission = session.submit()?;

    let pricing = PricingEngine::new(&config.pricing);
    let cost = (pricing.is_enabled() && !args.no_cost).then(|| pricing.estimate(&submission.breakdown));

    let report = Report::new(submission, cost, i18n);
    match args.format {
        OutputFormat::Text => write!(out, "{}", report.render_text())?,
        OutputFormat::Json => writeln!(out, "{}", report.to_json()?)?,
    }
    Ok(())
}

/// Print the energy saving tips
pub fn run_tips<W: Write>(i18n: &I18n, out: &mut W) -> Result<()> {
    write!(out, "{}", report::render_tips(i18n))?;
    Ok(())
}

/// Handle `config path|show|init` against the given file
pub fn run_config<W: Write>(action: ConfigAction, config: &Config, path: &Path, out: &mut W) -> Result<()> {
    match action {
        ConfigAction::Path => writeln!(out, "{}", path.display())?,
        ConfigAction::Show => write!(out, "{}", config.to_toml()?)?,
        ConfigAction::Init => {
            Config::default().save_to(path)?;
            log::info!("Wrote default config to {}", path.display());
            writeln!(out, "{}", path.display())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DwellingType, Error, Field, RoomConfig};

    fn english() -> I18n {
        I18n::new("en")
    }

    fn complete_args() -> EstimateArgs {
        EstimateArgs {
            name: Some("Jenil".into()),
            age: Some(19),
            city: Some("Ahmedabad".into()),
            area: Some("Satellite".into()),
            dwelling: Some(DwellingType::Flat),
            rooms: Some(RoomConfig::ThreeBhk),
            fridge: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_estimate_text() {
        let mut out = Vec::new();
        run_estimate(&complete_args(), &Config::default(), &english(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("264.0 kWh"));
        assert!(text.contains("Estimated Cost"));
    }

    #[test]
    fn test_estimate_json_without_cost() {
        let mut args = complete_args();
        args.format = OutputFormat::Json;
        args.no_cost = true;

        let mut out = Vec::new();
        run_estimate(&args, &Config::default(), &english(), &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value["total_kwh"], 264.0);
        assert!(value["cost"].is_null());
    }

    #[test]
    fn test_estimate_missing_fields_produces_no_output() {
        let mut args = complete_args();
        args.area = None;
        args.rooms = None;

        let mut out = Vec::new();
        let err = run_estimate(&args, &Config::default(), &english(), &mut out).unwrap_err();

        match err {
            Error::Validation(v) => assert_eq!(v.missing_fields(), &[Field::Area, Field::RoomConfig]),
            other => panic!("Expected validation error, got {:?}", other),
        }
        assert!(out.is_empty());
    }

    #[test]
    fn test_tips() {
        let mut out = Vec::new();
        run_tips(&english(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 6);
    }

    #[test]
    fn test_config_init_and_show() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut out = Vec::new();
        run_config(ConfigAction::Init, &Config::default(), &path, &mut out).unwrap();
        assert!(path.exists());

        let mut out = Vec::new();
        run_config(ConfigAction::Show, &Config::default(), &path, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("[pricing]"));
        assert!(text.contains("default_age = 25"));
    }
}
