//! English translations

use std::collections::HashMap;

pub fn get_translations() -> HashMap<String, String> {
    let mut t = HashMap::new();

    // App general
    t.insert("app.title".into(), "Energy Consumption Calculator".into());
    t.insert("app.subtitle".into(), "Calculate your monthly energy consumption based on your home and appliances".into());

    // Form sections
    t.insert("form.personal".into(), "Personal Information".into());
    t.insert("form.housing".into(), "Housing Details".into());
    t.insert("form.appliances".into(), "Appliances".into());

    // Form fields
    t.insert("form.name".into(), "Name".into());
    t.insert("form.age".into(), "Age".into());
    t.insert("form.city".into(), "City".into());
    t.insert("form.area".into(), "Area".into());
    t.insert("form.dwelling".into(), "What do you have?".into());
    t.insert("form.rooms".into(), "House Configuration".into());
    t.insert("form.unselected".into(), "(select)".into());
    t.insert("form.calculate".into(), "Calculate Energy Consumption".into());
    t.insert("form.submitted".into(), "Calculation completed!".into());
    t.insert("form.missing".into(), "Please fill in all required fields".into());

    // Dwelling types
    t.insert("dwelling.flat".into(), "Flat".into());
    t.insert("dwelling.tenement".into(), "Tenement".into());
    t.insert("dwelling.bungalow".into(), "Bungalow".into());

    // Appliances
    t.insert("appliance.ac".into(), "Air Conditioner".into());
    t.insert("appliance.fridge".into(), "Refrigerator".into());
    t.insert("appliance.washing_machine".into(), "Washing Machine".into());
    t.insert("appliance.none".into(), "No major appliances".into());
    t.insert("breakdown.base".into(), "Base Lighting & Fans".into());

    // Result
    t.insert("result.title".into(), "Energy Consumption Result".into());
    t.insert("result.monthly_for".into(), "Monthly Energy Consumption for".into());
    t.insert("result.monthly".into(), "Monthly".into());
    t.insert("result.daily".into(), "Daily Average".into());
    t.insert("result.breakdown".into(), "Energy Consumption Breakdown".into());
    t.insert("result.cost".into(), "Estimated Cost".into());
    t.insert("result.rate".into(), "Rate".into());
    t.insert("result.personal".into(), "Personal Details".into());
    t.insert("result.housing".into(), "Housing Info".into());
    t.insert("result.appliances".into(), "Appliances".into());
    t.insert("result.location".into(), "Location".into());
    t.insert("result.type".into(), "Type".into());
    t.insert("result.configuration".into(), "Configuration".into());

    // Tips
    t.insert("tips.title".into(), "Energy Saving Tips".into());
    t.insert("tips.1".into(), "Use LED bulbs instead of incandescent bulbs to save up to 80% energy".into());
    t.insert("tips.2".into(), "Set your AC temperature to 24\u{00B0}C or higher for optimal efficiency".into());
    t.insert("tips.3".into(), "Unplug appliances when not in use to avoid phantom energy consumption".into());
    t.insert("tips.4".into(), "Use natural light during the day to reduce lighting needs".into());
    t.insert("tips.5".into(), "Regular maintenance of appliances ensures better efficiency".into());

    // About
    t.insert("about.title".into(), "What we calculate".into());
    t.insert("about.base".into(), "Base Consumption: lighting and fans based on house size".into());
    t.insert("about.ac".into(), "Air Conditioner: 90 kWh per month".into());
    t.insert("about.fridge".into(), "Refrigerator: 120 kWh per month".into());
    t.insert("about.washing_machine".into(), "Washing Machine: 60 kWh per month".into());
    t.insert("about.footer".into(), "Estimates are based on typical appliance usage patterns.".into());

    // Units
    t.insert("unit.kwh".into(), "kWh".into());
    t.insert("unit.per_day".into(), "/day".into());
    t.insert("unit.per_month".into(), "/month".into());

    // Status bar help
    t.insert("help.form".into(), "\u{2191}\u{2193}: Move | Enter: Edit/Submit | \u{2190}\u{2192}: Change | Space: Toggle | ?: About | q: Quit".into());
    t.insert("help.editing".into(), "Enter: Confirm | Esc: Cancel".into());
    t.insert("help.result".into(), "r: Calculate again | q: Back to form".into());
    t.insert("help.about".into(), "q: Back".into());

    t
}
