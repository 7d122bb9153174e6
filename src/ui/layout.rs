//! Layout components (sidebar, status bar)

use super::components::{render_action_button, render_sidebar_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::content::COMPANY;
use crate::state::{FormSlot, Severity, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Sidebar width in columns
pub const SIDEBAR_WIDTH: u16 = 22;

/// Create the main layout with sidebar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(SIDEBAR_WIDTH), // Sidebar
            Constraint::Min(0),                // Main content
        ])
        .split(area);

    // Reserve bottom line for status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(chunks[1]);

    let sidebar_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(chunks[0]);

    (sidebar_chunks[0], main_chunks[0])
}

/// Areas of the four navigation buttons followed by the "Book interview" button
pub fn sidebar_button_areas(area: Rect) -> [Rect; 5] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),             // Company
            Constraint::Length(BUTTON_HEIGHT), // Home
            Constraint::Length(BUTTON_HEIGHT), // Values
            Constraint::Length(BUTTON_HEIGHT), // News
            Constraint::Length(BUTTON_HEIGHT), // Interview
            Constraint::Length(1),
            Constraint::Length(BUTTON_HEIGHT), // Book interview
            Constraint::Min(0),
        ])
        .split(area);
    [chunks[1], chunks[2], chunks[3], chunks[4], chunks[6]]
}

/// Draw the sidebar: company name, navigation buttons and the interview call to action
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let company_area = Rect {
        height: area.height.min(2),
        ..area
    };
    let company = Paragraph::new(Line::from(Span::styled(
        format!(" {COMPANY}"),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(company, company_area);

    let buttons = sidebar_button_areas(area);
    for (idx, view) in View::NAV.iter().enumerate() {
        render_sidebar_button(
            frame,
            buttons[idx],
            &(idx + 1).to_string(),
            view.label(),
            app.state.current_view == *view,
            true,
        );
    }

    if !app.state.current_view.is_form_view() {
        render_action_button(
            frame,
            buttons[4],
            "i Book interview",
            false,
            true,
            Some(Color::White),
        );
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::styled(
        format!(" {} ", app.submitter.sink_description()),
        Style::default().fg(Color::Blue),
    )];

    if app.state.form.is_in_flight() {
        spans.push(Span::styled(" ● sending ", Style::default().fg(Color::Yellow)));
    }

    let hints = get_view_hints(app.state.current_view, app.state.form.active_slot());
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    if let Some(toast) = &app.state.notices.toast {
        let color = match toast.notification.severity {
            Severity::Success => Color::Green,
            Severity::Info => Color::White,
            Severity::Error => Color::Red,
        };
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            toast.notification.text(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: View, slot: FormSlot) -> String {
    match view {
        View::Splash => "Press any key to skip".to_string(),
        View::Hero => "←/→:select  Enter:open  1-4:nav  i:interview  q:quit".to_string(),
        View::Values => "←/→:browse  drag:swipe  Esc:back  i:interview".to_string(),
        View::News => "←/→:browse  Enter:open card  click:toggle  Esc:back".to_string(),
        View::InterviewForm => format!("{}  Tab/Shift+Tab:move", slot.label()),
    }
}
