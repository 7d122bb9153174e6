//! Hero screen with the welcome text

use super::components::{render_action_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::content::{HERO_TEXT, HERO_TITLE};
use crate::state::HeroButton;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Areas of the "Why us" and "Book an interview" buttons
pub fn button_areas(area: Rect) -> [Rect; 2] {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(3), // Title
            Constraint::Length(5), // Text
            Constraint::Length(1),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Min(0),
        ])
        .split(inner);
    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(22),
            Constraint::Length(2),
            Constraint::Length(22),
            Constraint::Min(0),
        ])
        .split(rows[4]);
    [buttons[1], buttons[3]]
}

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(1),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Min(0),
        ])
        .split(inner);

    let title = Paragraph::new(Line::from(Span::styled(
        HERO_TITLE,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, rows[1]);

    let text = Paragraph::new(HERO_TEXT)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    let text_area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Max(70),
            Constraint::Min(0),
        ])
        .split(rows[2])[1];
    frame.render_widget(text, text_area);

    let [why_us, book] = button_areas(area);
    render_action_button(
        frame,
        why_us,
        HeroButton::WhyUs.label(),
        app.state.hero_button == HeroButton::WhyUs,
        true,
        Some(Color::Cyan),
    );
    render_action_button(
        frame,
        book,
        HeroButton::BookInterview.label(),
        app.state.hero_button == HeroButton::BookInterview,
        true,
        Some(Color::White),
    );
}
