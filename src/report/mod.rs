//! Results view rendering
//!
//! Turns a [`Submission`] into the plain-text report printed by the CLI or
//! a JSON document for scripting.

use crate::core::{Appliance, Error, Result, Submission};
use crate::i18n::I18n;
use crate::pricing::CostEstimate;
use serde::Serialize;

/// Width of the share bars in the text report
const BAR_WIDTH: usize = 30;

/// A rendered result, ready for text or JSON output
pub struct Report<'a> {
    submission: &'a Submission,
    cost: Option<CostEstimate>,
    i18n: &'a I18n,
}

#[derive(Serialize)]
struct JsonShare<'a> {
    label: &'a str,
    kwh: f64,
    percent: f64,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    input: &'a crate::core::HouseholdInput,
    total_kwh: f64,
    daily_kwh: f64,
    breakdown: Vec<JsonShare<'a>>,
    cost: Option<&'a CostEstimate>,
}

impl<'a> Report<'a> {
    pub fn new(submission: &'a Submission, cost: Option<CostEstimate>, i18n: &'a I18n) -> Self {
        Self { submission, cost, i18n }
    }

    /// Render the full results view as text
    pub fn render_text(&self) -> String {
        let t = self.i18n;
        let input = &self.submission.input;
        let breakdown = &self.submission.breakdown;
        let kwh = t.get("unit.kwh");

        let mut out = format!("== {} ==\n", t.get("result.title"));
        out.push_str(&format!("{:.1} {}\n", breakdown.total_kwh(), kwh));
        out.push_str(&format!("{} {}\n", t.get("result.monthly_for"), input.name));
        out.push_str(&format!(
            "{}: {:.2} {}{}\n",
            t.get("result.daily"),
            breakdown.daily_kwh(),
            kwh,
            t.get("unit.per_day")
        ));

        if let Some(cost) = &self.cost {
            out.push_str(&format!(
                "{}: {}{:.2}{} ({}: {}{:.2}/{})\n",
                t.get("result.cost"),
                cost.currency_symbol,
                cost.monthly_cost,
                t.get("unit.per_month"),
                t.get("result.rate"),
                cost.currency_symbol,
                cost.rate,
                kwh
            ));
        }

        out.push_str(&format!("\n-- {} --\n", t.get("result.breakdown")));
        let items = breakdown.items();
        let label_width = items
            .iter()
            .map(|i| t.category_label(&i.label).chars().count())
            .max()
            .unwrap_or(0);

        for (item, (_, pct)) in items.iter().zip(breakdown.shares()) {
            out.push_str(&format!(
                "  {:<width$}  {:>6.1} {}  {:>5.1}%  {}\n",
                t.category_label(&item.label),
                item.kwh,
                kwh,
                pct,
                share_bar(pct),
                width = label_width
            ));
        }

        out.push_str(&format!("\n-- {} --\n", t.get("result.personal")));
        out.push_str(&format!("  {}: {}\n", t.get("form.name"), input.name));
        out.push_str(&format!("  {}: {}\n", t.get("form.age"), input.age));
        out.push_str(&format!("  {}: {}, {}\n", t.get("result.location"), input.city, input.area));

        out.push_str(&format!("\n-- {} --\n", t.get("result.housing")));
        out.push_str(&format!("  {}: {}\n", t.get("result.type"), t.get(input.dwelling_type.label_key())));
        out.push_str(&format!("  {}: {}\n", t.get("result.configuration"), input.room_config));

        out.push_str(&format!("\n-- {} --\n", t.get("result.appliances")));
        out.push_str(&appliance_lines(&input.appliances(), t));

        out.push_str(&format!("\n-- {} --\n", t.get("tips.title")));
        for tip in t.tips() {
            out.push_str(&format!("  \u{2022} {}\n", tip));
        }
        out
    }

    /// Render input, breakdown with shares and cost as pretty JSON
    pub fn to_json(&self) -> Result<String> {
        let breakdown = &self.submission.breakdown;
        let items = breakdown.items();
        let shares = breakdown.shares();

        let report = JsonReport {
            input: &self.submission.input,
            total_kwh: breakdown.total_kwh(),
            daily_kwh: breakdown.daily_kwh(),
            breakdown: items
                .iter()
                .zip(shares.iter())
                .map(|(item, (_, pct))| JsonShare {
                    label: &item.label,
                    kwh: item.kwh,
                    percent: *pct,
                })
                .collect(),
            cost: self.cost.as_ref(),
        };

        serde_json::to_string_pretty(&report).map_err(|e| Error::Serialization(e.to_string()))
    }
}

/// Proportional bar for a percentage share
pub fn share_bar(pct: f64) -> String {
    let filled = ((pct.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!("{}{}", "\u{2588}".repeat(filled), "\u{2591}".repeat(BAR_WIDTH - filled))
}

/// Tips block on its own, for the `tips` command
pub fn render_tips(i18n: &I18n) -> String {
    let mut out = format!("{}\n", i18n.get("tips.title"));
    for tip in i18n.tips() {
        out.push_str(&format!("  \u{2022} {}\n", tip));
    }
    out
}

fn appliance_lines(appliances: &[Appliance], t: &I18n) -> String {
    if appliances.is_empty() {
        return format!("  {}\n", t.get("appliance.none"));
    }
    appliances
        .iter()
        .map(|a| format!("  [x] {}\n", t.get(a.label_key())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::compute_consumption;
    use crate::core::{DwellingType, HouseholdInput, PricingConfig, RoomConfig};
    use crate::pricing::PricingEngine;

    fn submission(has_ac: bool) -> Submission {
        let input = HouseholdInput {
            name: "Jenil".into(),
            age: 19,
            city: "Ahmedabad".into(),
            area: "Maninagar".into(),
            dwelling_type: DwellingType::Bungalow,
            room_config: RoomConfig::TwoBhk,
            has_ac,
            has_fridge: false,
            has_washing_machine: false,
        };
        let breakdown = compute_consumption(&input);
        Submission { input, breakdown }
    }

    #[test]
    fn test_text_report_sections() {
        let i18n = I18n::new("en");
        let sub = submission(true);
        let text = Report::new(&sub, None, &i18n).render_text();

        assert!(text.contains("198.0 kWh"));
        assert!(text.contains("Monthly Energy Consumption for Jenil"));
        assert!(text.contains("Base Lighting & Fans"));
        assert!(text.contains("[x] Air Conditioner"));
        assert!(text.contains("Location: Ahmedabad, Maninagar"));
        assert!(text.contains("Energy Saving Tips"));
        assert!(!text.contains("Estimated Cost"));
    }

    #[test]
    fn test_text_report_without_appliances() {
        let i18n = I18n::new("en");
        let sub = submission(false);
        let text = Report::new(&sub, None, &i18n).render_text();
        assert!(text.contains("No major appliances"));
        assert!(text.contains("100.0%"));
    }

    #[test]
    fn test_text_report_with_cost() {
        let i18n = I18n::new("en");
        let sub = submission(false);
        let cost = PricingEngine::new(&PricingConfig::default()).estimate_for_month(&sub.breakdown, 6);
        let text = Report::new(&sub, Some(cost), &i18n).render_text();

        // 108 kWh at 7.5
        assert!(text.contains("Estimated Cost: \u{20B9}810.00/month"));
    }

    #[test]
    fn test_french_report() {
        let i18n = I18n::new("fr");
        let sub = submission(true);
        let text = Report::new(&sub, None, &i18n).render_text();
        assert!(text.contains("Climatiseur"));
        assert!(text.contains("Pavillon"));
    }

    #[test]
    fn test_json_report() {
        let i18n = I18n::new("en");
        let sub = submission(true);
        let json = Report::new(&sub, None, &i18n).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["total_kwh"], 198.0);
        assert_eq!(value["input"]["room_config"], "2BHK");
        assert_eq!(value["breakdown"].as_array().unwrap().len(), 2);
        assert_eq!(value["breakdown"][1]["label"], "Air Conditioner");
        assert!(value["cost"].is_null());
    }

    #[test]
    fn test_share_bar_width() {
        assert_eq!(share_bar(0.0).chars().count(), BAR_WIDTH);
        assert_eq!(share_bar(100.0), "\u{2588}".repeat(BAR_WIDTH));
        assert_eq!(share_bar(150.0).chars().count(), BAR_WIDTH);
    }

    #[test]
    fn test_text_report_is_deterministic() {
        let i18n = I18n::new("en");
        let sub = submission(true);
        let first = Report::new(&sub, None, &i18n).render_text();
        let second = Report::new(&sub, None, &i18n).render_text();

        assert_eq!(first, second);
        assert!(first.ends_with("\n"));
        assert!(first.contains("-- Energy Saving Tips --"));
    }
}
