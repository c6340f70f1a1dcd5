//! Terminal form interface
//!
//! Single-page form with explicit submit, rendered with ratatui and driven
//! by crossterm key events.

pub mod app;
pub mod input;
pub mod ui;

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::core::{Config, Error, Result};
use app::{App, AppResult};

/// Run the interactive form until the user quits
pub fn run_tui(config: &Config) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Some(submission) = app.session.result() {
        log::info!(
            "Session ended with {:.1} kWh/month result",
            submission.breakdown.total_kwh()
        );
    }

    result
}

/// Main application loop
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .map_err(|e| Error::Tui(e.to_string()))?;

        match input::handle_input(app)? {
            AppResult::Continue => {}
            AppResult::Quit => break,
        }
    }

    Ok(())
}
