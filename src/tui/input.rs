//! Input handling for the TUI
//!
//! Handles keyboard input and maps to application actions.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{App, AppResult, InputMode, Screen};
use crate::core::Result;

/// Handle user input
pub fn handle_input(app: &mut App) -> Result<AppResult> {
    // Poll for events with a small timeout
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            return Ok(handle_key(app, key));
        }
    }

    Ok(AppResult::Continue)
}

/// Apply a single key event to the app
pub fn handle_key(app: &mut App, key: KeyEvent) -> AppResult {
    // Only handle key press events (not release)
    if key.kind != KeyEventKind::Press {
        return AppResult::Continue;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => return AppResult::Quit,
            KeyCode::Char('s') if app.screen == Screen::Form => {
                // A rejected edit keeps its error status and blocks the submit
                if app.input_mode == InputMode::Editing && !app.confirm_editing() {
                    return AppResult::Continue;
                }
                app.submit();
                return AppResult::Continue;
            }
            _ => {}
        }
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_input(app, key.code),
        InputMode::Editing => {
            handle_editing_input(app, key.code);
            AppResult::Continue
        }
    }
}

/// Handle input in normal (navigation) mode
fn handle_normal_input(app: &mut App, key: KeyCode) -> AppResult {
    match app.screen {
        Screen::Form => handle_form_input(app, key),
        Screen::Result => {
            match key {
                KeyCode::Char('q') | KeyCode::Esc => {
                    app.go_back();
                }
                KeyCode::Char('r') => app.calculate_again(),
                _ => {}
            }
            AppResult::Continue
        }
        Screen::About => {
            if matches!(key, KeyCode::Char('q') | KeyCode::Esc | KeyCode::Char('?')) {
                app.go_back();
            }
            AppResult::Continue
        }
    }
}

fn handle_form_input(app: &mut App, key: KeyCode) -> AppResult {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => return AppResult::Quit,

        // Navigation
        KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => app.move_up(),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => app.move_down(),

        // Value changes
        KeyCode::Left | KeyCode::Char('h') => app.cycle(false),
        KeyCode::Right | KeyCode::Char('l') => app.cycle(true),
        KeyCode::Char(' ') => app.toggle(),
        KeyCode::Enter => app.select(),

        KeyCode::Char('?') => app.go_to(Screen::About),
        _ => {}
    }
    AppResult::Continue
}

/// Handle input while editing a text field
fn handle_editing_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Enter => {
            app.confirm_editing();
        }
        KeyCode::Esc => app.cancel_editing(),
        KeyCode::Backspace => {
            app.input_buffer.pop();
        }
        KeyCode::Char(c) => app.input_buffer.push(c),
        _ => {}
    }
}
