//! Application state and logic
//!
//! Manages the TUI application state including current screen,
//! focused form field, inline editing and submission.

use crate::core::{Appliance, Config, DwellingType, RoomConfig};
use crate::form::FormSession;
use crate::i18n::I18n;
use crate::pricing::{CostEstimate, PricingEngine};

/// Result of input handling
pub enum AppResult {
    /// Continue running
    Continue,
    /// Quit the application
    Quit,
}

/// Current screen being displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Input form
    Form,
    /// Calculation result
    Result,
    /// What is calculated and how
    About,
}

/// Input mode for text entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Normal navigation mode
    Normal,
    /// Editing a text field
    Editing,
}

/// Form rows in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormItem {
    Name,
    Age,
    City,
    Area,
    Dwelling,
    Rooms,
    Ac,
    Fridge,
    WashingMachine,
    Calculate,
}

impl FormItem {
    pub fn all() -> &'static [FormItem] {
        &[
            FormItem::Name,
            FormItem::Age,
            FormItem::City,
            FormItem::Area,
            FormItem::Dwelling,
            FormItem::Rooms,
            FormItem::Ac,
            FormItem::Fridge,
            FormItem::WashingMachine,
            FormItem::Calculate,
        ]
    }

    /// Translation key for the row label
    pub fn label_key(&self) -> &'static str {
        match self {
            FormItem::Name => "form.name",
            FormItem::Age => "form.age",
            FormItem::City => "form.city",
            FormItem::Area => "form.area",
            FormItem::Dwelling => "form.dwelling",
            FormItem::Rooms => "form.rooms",
            FormItem::Ac => Appliance::AirConditioner.label_key(),
            FormItem::Fridge => Appliance::Refrigerator.label_key(),
            FormItem::WashingMachine => Appliance::WashingMachine.label_key(),
            FormItem::Calculate => "form.calculate",
        }
    }

    /// Rows edited through the inline text editor
    pub fn is_editable(&self) -> bool {
        matches!(self, FormItem::Name | FormItem::Age | FormItem::City | FormItem::Area)
    }

    pub fn appliance(&self) -> Option<Appliance> {
        match self {
            FormItem::Ac => Some(Appliance::AirConditioner),
            FormItem::Fridge => Some(Appliance::Refrigerator),
            FormItem::WashingMachine => Some(Appliance::WashingMachine),
            _ => None,
        }
    }
}

/// Main application state
pub struct App {
    pub screen: Screen,
    pub input_mode: InputMode,
    pub session: FormSession,
    /// Index into `FormItem::all()`
    pub focus: usize,
    /// Text being edited in `InputMode::Editing`
    pub input_buffer: String,
    pub status_message: Option<String>,
    pub status_is_error: bool,
    pub i18n: I18n,
    pricing: PricingEngine,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            screen: Screen::Form,
            input_mode: InputMode::Normal,
            session: FormSession::new(&config.form),
            focus: 0,
            input_buffer: String::new(),
            status_message: None,
            status_is_error: false,
            i18n: I18n::new(&config.general.language),
            pricing: PricingEngine::new(&config.pricing),
        }
    }

    pub fn focused(&self) -> FormItem {
        FormItem::all()[self.focus]
    }

    pub fn go_to(&mut self, screen: Screen) {
        self.screen = screen;
        self.input_mode = InputMode::Normal;
    }

    /// Leave a secondary screen; `false` when already on the form
    pub fn go_back(&mut self) -> bool {
        match self.screen {
            Screen::Form => false,
            Screen::Result | Screen::About => {
                self.go_to(Screen::Form);
                true
            }
        }
    }

    pub fn move_up(&mut self) {
        let count = FormItem::all().len();
        self.focus = (self.focus + count - 1) % count;
    }

    pub fn move_down(&mut self) {
        self.focus = (self.focus + 1) % FormItem::all().len();
    }

    /// Enter on the focused row
    pub fn select(&mut self) {
        let item = self.focused();
        match item {
            FormItem::Name | FormItem::City | FormItem::Area => {
                let value = self.text_value(item).to_string();
                self.start_editing(&value);
            }
            FormItem::Age => {
                let value = self.session.form.age.to_string();
                self.start_editing(&value);
            }
            FormItem::Dwelling | FormItem::Rooms => self.cycle(true),
            FormItem::Ac | FormItem::Fridge | FormItem::WashingMachine => self.toggle(),
            FormItem::Calculate => self.submit(),
        }
    }

    /// Space on the focused row
    pub fn toggle(&mut self) {
        if let Some(appliance) = self.focused().appliance() {
            self.session.form.toggle(appliance);
        }
    }

    /// Left/right on the focused row
    pub fn cycle(&mut self, forward: bool) {
        let item = self.focused();
        let form = &mut self.session.form;
        match item {
            FormItem::Dwelling => {
                form.dwelling_type = cycle_option(DwellingType::all(), form.dwelling_type, forward);
            }
            FormItem::Rooms => {
                form.room_config = cycle_option(RoomConfig::all(), form.room_config, forward);
            }
            FormItem::Age => {
                let age = if forward {
                    form.age.saturating_add(1)
                } else {
                    form.age.saturating_sub(1)
                };
                form.set_age(age);
            }
            _ => {}
        }
    }

    pub fn start_editing(&mut self, initial: &str) {
        self.input_buffer = initial.to_string();
        self.input_mode = InputMode::Editing;
    }

    pub fn cancel_editing(&mut self) {
        self.input_buffer.clear();
        self.input_mode = InputMode::Normal;
    }

    /// Commit the edit buffer into the focused field.
    ///
    /// Returns false when the value was rejected and the field left unchanged.
    pub fn confirm_editing(&mut self) -> bool {
        let value = std::mem::take(&mut self.input_buffer);
        self.input_mode = InputMode::Normal;

        match self.focused() {
            FormItem::Name => self.session.form.name = value,
            FormItem::City => self.session.form.city = value,
            FormItem::Area => self.session.form.area = value,
            FormItem::Age => match value.trim().parse::<u32>() {
                Ok(age) => self.session.form.set_age(age),
                Err(_) => {
                    let msg = format!("{}: {}", self.i18n.get("form.age"), value.trim());
                    self.set_status(&msg, true);
                    return false;
                }
            },
            _ => {}
        }
        true
    }

    /// Validate and calculate; on success show the result screen
    pub fn submit(&mut self) {
        match self.session.submit().map(|_| ()) {
            Ok(_) => {
                let msg = self.i18n.get("form.submitted");
                self.set_status(&msg, false);
                self.go_to(Screen::Result);
            }
            Err(e) => {
                let msg = self.i18n.validation_message(&e);
                self.set_status(&msg, true);
            }
        }
    }

    /// Drop the result and return to the form
    pub fn calculate_again(&mut self) {
        self.session.reset();
        self.clear_status();
        self.go_to(Screen::Form);
    }

    /// Cost of the current result, when pricing is enabled
    pub fn cost(&self) -> Option<CostEstimate> {
        let submission = self.session.result()?;
        self.pricing
            .is_enabled()
            .then(|| self.pricing.estimate(&submission.breakdown))
    }

    pub fn set_status(&mut self, msg: &str, is_error: bool) {
        self.status_message = Some(msg.to_string());
        self.status_is_error = is_error;
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
        self.status_is_error = false;
    }

    /// Display value of a form row
    pub fn display_value(&self, item: FormItem) -> String {
        let form = &self.session.form;
        let unselected = || self.i18n.get("form.unselected");
        match item {
            FormItem::Name | FormItem::City | FormItem::Area => self.text_value(item).to_string(),
            FormItem::Age => form.age.to_string(),
            FormItem::Dwelling => form
                .dwelling_type
                .map(|d| self.i18n.get(d.label_key()))
                .unwrap_or_else(unselected),
            FormItem::Rooms => form
                .room_config
                .map(|r| r.label().to_string())
                .unwrap_or_else(unselected),
            FormItem::Ac | FormItem::Fridge | FormItem::WashingMachine => {
                let checked = item.appliance().map(|a| form.has(a)).unwrap_or(false);
                let mark = if checked { "[x]" } else { "[ ]" };
                mark.to_string()
            }
            FormItem::Calculate => String::new(),
        }
    }

    fn text_value(&self, item: FormItem) -> &str {
        let form = &self.session.form;
        match item {
            FormItem::Name => &form.name,
            FormItem::City => &form.city,
            FormItem::Area => &form.area,
            _ => "",
        }
    }
}

/// Step through `None -> first -> ... -> last -> None`
fn cycle_option<T: Copy + PartialEq>(values: &[T], current: Option<T>, forward: bool) -> Option<T> {
    let pos = current.and_then(|c| values.iter().position(|v| *v == c));
    let next = match (pos, forward) {
        (None, true) => Some(0),
        (None, false) => values.len().checked_sub(1),
        (Some(i), true) => (i + 1 < values.len()).then_some(i + 1),
        (Some(i), false) => i.checked_sub(1),
    };
    next.map(|i| values[i])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let mut config = Config::default();
        config.general.language = "en".into();
        App::new(&config)
    }

    fn fill(app: &mut App) {
        app.session.form.name = "Jenil".into();
        app.session.form.city = "Surat".into();
        app.session.form.area = "Vesu".into();
        app.session.form.dwelling_type = Some(DwellingType::Flat);
        app.session.form.room_config = Some(RoomConfig::ThreeBhk);
    }

    fn focus_on(app: &mut App, item: FormItem) {
        app.focus = FormItem::all().iter().position(|i| *i == item).unwrap();
    }

    #[test]
    fn test_new_app_starts_on_form() {
        let app = app();
        assert_eq!(app.screen, Screen::Form);
        assert_eq!(app.focused(), FormItem::Name);
        assert_eq!(app.session.form.age, 25);
    }

    #[test]
    fn test_focus_wraps() {
        let mut app = app();
        app.move_up();
        assert_eq!(app.focused(), FormItem::Calculate);
        app.move_down();
        assert_eq!(app.focused(), FormItem::Name);
    }

    #[test]
    fn test_cycle_option_includes_unselected() {
        let values = RoomConfig::all();
        assert_eq!(cycle_option(values, None, true), Some(RoomConfig::OneBhk));
        assert_eq!(cycle_option(values, Some(RoomConfig::ThreeBhk), true), None);
        assert_eq!(cycle_option(values, None, false), Some(RoomConfig::ThreeBhk));
        assert_eq!(cycle_option(values, Some(RoomConfig::OneBhk), false), None);
    }

    #[test]
    fn test_editing_name() {
        let mut app = app();
        app.select();
        assert_eq!(app.input_mode, InputMode::Editing);
        app.input_buffer.push_str("Asha");
        app.confirm_editing();
        assert_eq!(app.session.form.name, "Asha");
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_cancel_editing_keeps_value() {
        let mut app = app();
        app.session.form.city = "Pune".into();
        focus_on(&mut app, FormItem::City);
        app.select();
        app.input_buffer = "Mumbai".into();
        app.cancel_editing();
        assert_eq!(app.session.form.city, "Pune");
    }

    #[test]
    fn test_age_edit_clamps_and_rejects_garbage() {
        let mut app = app();
        focus_on(&mut app, FormItem::Age);

        app.select();
        app.input_buffer = "999".into();
        app.confirm_editing();
        assert_eq!(app.session.form.age, 120);

        app.select();
        app.input_buffer = "abc".into();
        app.confirm_editing();
        assert_eq!(app.session.form.age, 120);
        assert!(app.status_is_error);
    }

    #[test]
    fn test_age_adjusts_with_arrows() {
        let mut app = app();
        focus_on(&mut app, FormItem::Age);
        app.cycle(true);
        assert_eq!(app.session.form.age, 26);
        app.session.form.age = 1;
        app.cycle(false);
        assert_eq!(app.session.form.age, 1);
    }

    #[test]
    fn test_toggle_appliance() {
        let mut app = app();
        focus_on(&mut app, FormItem::Fridge);
        app.toggle();
        assert!(app.session.form.has_fridge);
        assert_eq!(app.display_value(FormItem::Fridge), "[x]");
        app.select();
        assert!(!app.session.form.has_fridge);
    }

    #[test]
    fn test_submit_incomplete_form_shows_error() {
        let mut app = app();
        focus_on(&mut app, FormItem::Calculate);
        app.select();

        assert_eq!(app.screen, Screen::Form);
        assert!(app.status_is_error);
        assert!(app.status_message.as_deref().unwrap().contains("Name"));
        assert!(app.session.result().is_none());
    }

    #[test]
    fn test_submit_complete_form_shows_result() {
        let mut app = app();
        fill(&mut app);
        app.session.form.has_ac = true;
        app.submit();

        assert_eq!(app.screen, Screen::Result);
        assert!(!app.status_is_error);
        let total = app.session.result().unwrap().breakdown.total_kwh();
        assert_eq!(total, 234.0);
        assert!(app.cost().is_some());
    }

    #[test]
    fn test_cost_hidden_when_pricing_disabled() {
        let mut config = Config::default();
        config.pricing.enabled = false;
        let mut app = App::new(&config);
        fill(&mut app);
        app.submit();
        assert!(app.cost().is_none());
    }

    #[test]
    fn test_calculate_again() {
        let mut app = app();
        fill(&mut app);
        app.submit();
        app.calculate_again();

        assert_eq!(app.screen, Screen::Form);
        assert!(app.session.result().is_none());
        assert_eq!(app.session.form.name, "Jenil");
    }

    #[test]
    fn test_unselected_display() {
        let app = app();
        assert_eq!(app.display_value(FormItem::Dwelling), "(select)");
        assert_eq!(app.display_value(FormItem::Rooms), "(select)");
    }
}
