//! UI rendering for the TUI
//!
//! Handles layout and rendering of all screens using ratatui.

use ratatui::{
    prelude::*,
    widgets::{BarChart, Block, Borders, Clear, Gauge, List, ListItem, Paragraph, Wrap},
};

use super::app::{App, FormItem, InputMode, Screen};
use crate::core::Submission;

/// Fill colours cycled through the breakdown categories
const CATEGORY_COLORS: [Color; 4] = [Color::Blue, Color::Magenta, Color::LightMagenta, Color::LightRed];

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Status/Help
        ])
        .split(frame.area());

    draw_title(frame, chunks[0], app);

    match app.screen {
        Screen::Form => draw_form(frame, chunks[1], app),
        Screen::Result => match app.session.result() {
            Some(submission) => draw_result(frame, chunks[1], app, submission),
            None => draw_form(frame, chunks[1], app),
        },
        Screen::About => draw_about(frame, chunks[1], app),
    }

    draw_status(frame, chunks[2], app);

    if app.input_mode == InputMode::Editing {
        draw_input_popup(frame, app);
    }
}

/// Draw the title bar
fn draw_title(frame: &mut Frame, area: Rect, app: &App) {
    let title = match app.screen {
        Screen::Form => app.i18n.get("app.title"),
        Screen::Result => app.i18n.get("result.title"),
        Screen::About => app.i18n.get("about.title"),
    };

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));

    let title_text = Paragraph::new(format!(" \u{26A1} {} ", title))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(block);

    frame.render_widget(title_text, area);
}

/// Draw the status bar
fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let (text, style) = if let Some(ref msg) = app.status_message {
        let color = if app.status_is_error {
            Color::Red
        } else {
            Color::Green
        };
        (msg.clone(), Style::default().fg(color))
    } else {
        let key = match (app.input_mode, app.screen) {
            (InputMode::Editing, _) => "help.editing",
            (InputMode::Normal, Screen::Form) => "help.form",
            (InputMode::Normal, Screen::Result) => "help.result",
            (InputMode::Normal, Screen::About) => "help.about",
        };
        (app.i18n.get(key), Style::default().fg(Color::DarkGray))
    };

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray));

    let status = Paragraph::new(format!(" {} ", text))
        .style(style)
        .block(block);

    frame.render_widget(status, area);
}

/// Draw the input form
fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let t = &app.i18n;
    let label_width = FormItem::all()
        .iter()
        .map(|i| t.get(i.label_key()).chars().count())
        .max()
        .unwrap_or(0);

    let mut items: Vec<ListItem> = Vec::new();
    for (i, item) in FormItem::all().iter().enumerate() {
        // Section headers before the first row of each group
        let header = match item {
            FormItem::Name => Some("form.personal"),
            FormItem::Dwelling => Some("form.housing"),
            FormItem::Ac => Some("form.appliances"),
            _ => None,
        };
        if let Some(key) = header {
            if i > 0 {
                items.push(ListItem::new(""));
            }
            items.push(
                ListItem::new(t.get(key)).style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            );
        }

        let focused = i == app.focus;
        let prefix = if focused { "\u{25B6} " } else { "  " };
        let style = if focused {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let content = if *item == FormItem::Calculate {
            format!("{}[ {} ]", prefix, t.get(item.label_key()))
        } else {
            let mut value = app.display_value(*item);
            if focused && matches!(item, FormItem::Dwelling | FormItem::Rooms) {
                value = format!("\u{2039} {} \u{203A}", value);
            } else if focused && item.is_editable() && value.is_empty() {
                value = "\u{2026}".to_string();
            }
            format!("{}{:<width$}  {}", prefix, t.get(item.label_key()), value, width = label_width)
        };

        if *item == FormItem::Calculate {
            items.push(ListItem::new(""));
        }
        items.push(ListItem::new(content).style(style));
    }

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {} ", t.get("app.subtitle"))),
    );

    frame.render_widget(list, area);
}

/// Draw the calculation result
fn draw_result(frame: &mut Frame, area: Rect, app: &App, submission: &Submission) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(area);

    draw_metrics(frame, rows[0], app, submission);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(rows[1]);

    draw_breakdown(frame, columns[0], app, submission);
    draw_details(frame, columns[1], app, submission);
}

/// Headline metrics: monthly, daily and cost
fn draw_metrics(frame: &mut Frame, area: Rect, app: &App, submission: &Submission) {
    let t = &app.i18n;
    let kwh = t.get("unit.kwh");
    let breakdown = &submission.breakdown;

    let mut metrics = vec![
        (
            format!("{} {}", t.get("result.monthly_for"), submission.input.name),
            format!("{:.1} {}", breakdown.total_kwh(), kwh),
        ),
        (
            t.get("result.daily"),
            format!("{:.2} {}{}", breakdown.daily_kwh(), kwh, t.get("unit.per_day")),
        ),
    ];
    if let Some(cost) = app.cost() {
        metrics.push((
            t.get("result.cost"),
            format!("{}{:.2}{}", cost.currency_symbol, cost.monthly_cost, t.get("unit.per_month")),
        ));
    }

    let constraints = vec![Constraint::Ratio(1, metrics.len() as u32); metrics.len()];
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for ((label, value), cell) in metrics.into_iter().zip(cells.iter()) {
        let metric = Paragraph::new(value)
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(format!(" {} ", label)),
            );
        frame.render_widget(metric, *cell);
    }
}

/// Bar chart plus one share gauge per category
fn draw_breakdown(frame: &mut Frame, area: Rect, app: &App, submission: &Submission) {
    let t = &app.i18n;
    let breakdown = &submission.breakdown;
    let items = breakdown.items();
    let shares = breakdown.shares();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" {} ", t.get("result.breakdown")));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(items.len() as u16)])
        .split(inner);

    let labels: Vec<String> = items.iter().map(|i| short_label(&t.category_label(&i.label))).collect();
    let data: Vec<(&str, u64)> = labels
        .iter()
        .zip(items.iter())
        .map(|(label, item)| (label.as_str(), item.kwh.round() as u64))
        .collect();

    let chart = BarChart::default()
        .data(data.as_slice())
        .bar_width(9)
        .bar_gap(2)
        .bar_style(Style::default().fg(Color::Magenta))
        .value_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));
    frame.render_widget(chart, parts[0]);

    let gauge_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(1); items.len()])
        .split(parts[1]);

    for (i, ((label, pct), row)) in shares.iter().zip(gauge_rows.iter()).enumerate() {
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(CATEGORY_COLORS[i % CATEGORY_COLORS.len()]))
            .ratio((pct / 100.0).clamp(0.0, 1.0))
            .label(format!("{} {:.1}%", t.category_label(label), pct));
        frame.render_widget(gauge, *row);
    }
}

/// Submitted details and energy saving tips
fn draw_details(frame: &mut Frame, area: Rect, app: &App, submission: &Submission) {
    let t = &app.i18n;
    let input = &submission.input;
    let heading = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::styled(t.get("result.personal"), heading),
        Line::raw(format!("{}: {}", t.get("form.name"), input.name)),
        Line::raw(format!("{}: {}", t.get("form.age"), input.age)),
        Line::raw(format!("{}: {}, {}", t.get("result.location"), input.city, input.area)),
        Line::raw(""),
        Line::styled(t.get("result.housing"), heading),
        Line::raw(format!("{}: {}", t.get("result.type"), t.get(input.dwelling_type.label_key()))),
        Line::raw(format!("{}: {}", t.get("result.configuration"), input.room_config)),
        Line::raw(""),
        Line::styled(t.get("result.appliances"), heading),
    ];

    let appliances = input.appliances();
    if appliances.is_empty() {
        lines.push(Line::styled(t.get("appliance.none"), Style::default().fg(Color::DarkGray)));
    }
    for appliance in appliances {
        lines.push(Line::styled(
            format!("\u{2713} {}", t.get(appliance.label_key())),
            Style::default().fg(Color::Green),
        ));
    }

    lines.push(Line::raw(""));
    lines.push(Line::styled(t.get("tips.title"), heading));
    for tip in t.tips() {
        lines.push(Line::raw(format!("\u{2022} {}", tip)));
    }

    let details = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(details, area);
}

/// Draw the about screen
fn draw_about(frame: &mut Frame, area: Rect, app: &App) {
    let t = &app.i18n;
    let text = vec![
        Line::raw(""),
        Line::raw(format!("  \u{2022} {}", t.get("about.base"))),
        Line::raw(format!("  \u{2022} {}", t.get("about.ac"))),
        Line::raw(format!("  \u{2022} {}", t.get("about.fridge"))),
        Line::raw(format!("  \u{2022} {}", t.get("about.washing_machine"))),
        Line::raw(""),
        Line::styled(
            format!("  {}", t.get("about.footer")),
            Style::default().fg(Color::DarkGray),
        ),
        Line::raw(""),
        Line::styled(
            format!("  v{}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let paragraph = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(paragraph, area);
}

/// Draw the inline editor popup
fn draw_input_popup(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 20, frame.area());
    let label = app.i18n.get(app.focused().label_key());

    let input = Paragraph::new(format!("{}\u{2588}", app.input_buffer))
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(format!(" {} ", label)),
        );

    frame.render_widget(Clear, area);
    frame.render_widget(input, area);
}

/// First word of a category label, to fit under a chart bar
fn short_label(label: &str) -> String {
    label.split_whitespace().next().unwrap_or(label).to_string()
}

/// Helper function to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Config, DwellingType, RoomConfig};
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;

    fn create_test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
        Terminal::new(TestBackend::new(width, height)).unwrap()
    }

    fn app() -> App {
        let mut config = Config::default();
        config.general.language = "en".into();
        App::new(&config)
    }

    fn calculated_app() -> App {
        let mut app = app();
        app.session.form.name = "Jenil".into();
        app.session.form.city = "Surat".into();
        app.session.form.area = "Vesu".into();
        app.session.form.dwelling_type = Some(DwellingType::Flat);
        app.session.form.room_config = Some(RoomConfig::OneBhk);
        app.session.form.has_fridge = true;
        app.submit();
        app
    }

    fn buffer_text(buffer: &Buffer) -> String {
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    fn render(app: &App, width: u16, height: u16) -> String {
        let mut terminal = create_test_terminal(width, height);
        terminal.draw(|f| draw(f, app)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_centered_rect_basic() {
        let area = Rect::new(0, 0, 100, 50);
        let centered = centered_rect(60, 20, area);
        assert_eq!(centered.width, 60);
        assert_eq!(centered.height, 10);
        assert_eq!(centered.x, 20);
        assert_eq!(centered.y, 20);
    }

    #[test]
    fn test_short_label() {
        assert_eq!(short_label("Air Conditioner"), "Air");
        assert_eq!(short_label("Refrigerator"), "Refrigerator");
    }

    #[test]
    fn test_draw_form_screen() {
        let text = render(&app(), 100, 30);
        assert!(text.contains("Personal Information"));
        assert!(text.contains("House Configuration"));
        assert!(text.contains("(select)"));
        assert!(text.contains("Calculate Energy Consumption"));
    }

    #[test]
    fn test_draw_result_screen() {
        let app = calculated_app();
        assert_eq!(app.screen, Screen::Result);

        let text = render(&app, 120, 40);
        assert!(text.contains("192.0 kWh"));
        assert!(text.contains("Energy Consumption Breakdown"));
        assert!(text.contains("Refrigerator"));
        assert!(text.contains("Energy Saving Tips"));
    }

    #[test]
    fn test_draw_about_screen() {
        let mut app = app();
        app.go_to(Screen::About);
        let text = render(&app, 100, 24);
        assert!(text.contains("120 kWh per month"));
    }

    #[test]
    fn test_draw_error_status() {
        let mut app = app();
        app.submit();
        let text = render(&app, 120, 30);
        assert!(text.contains("Please fill in all required fields"));
    }

    #[test]
    fn test_draw_input_popup() {
        let mut app = app();
        app.start_editing("Jen");
        let text = render(&app, 100, 30);
        assert!(text.contains("Jen"));
    }

    #[test]
    fn test_draw_small_terminal_does_not_panic() {
        let app = calculated_app();
        render(&app, 20, 8);
        render(&self::app(), 20, 8);
    }
}
