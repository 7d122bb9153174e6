//! Company values carousel

use crate::app::App;
use crate::content::{VALUES, VALUES_TEXT, VALUES_TITLE};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(format!(" {VALUES_TITLE} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Intro
            Constraint::Min(0),
            Constraint::Length(8), // Card
            Constraint::Length(1),
            Constraint::Length(1), // Dots
            Constraint::Min(0),
        ])
        .margin(1)
        .split(inner);

    let intro = Paragraph::new(VALUES_TEXT)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(intro, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(20),
            Constraint::Length(3),
        ])
        .split(rows[2]);

    let index = app.state.values.index();
    if let Some(value) = VALUES.get(index) {
        let card = Paragraph::new(vec![
            Line::from(Span::styled(
                value.title,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(value.description, Style::default().fg(Color::Gray))),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(card, columns[1]);
    }

    let arrow = Style::default().fg(Color::Cyan);
    frame.render_widget(
        Paragraph::new(Span::styled("‹", arrow)).alignment(Alignment::Center),
        centered_row(columns[0]),
    );
    frame.render_widget(
        Paragraph::new(Span::styled("›", arrow)).alignment(Alignment::Center),
        centered_row(columns[2]),
    );

    let dots: Vec<Span> = (0..app.state.values.len())
        .map(|i| {
            if i == index {
                Span::styled("● ", Style::default().fg(Color::Cyan))
            } else {
                Span::styled("○ ", Style::default().fg(Color::DarkGray))
            }
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(dots)).alignment(Alignment::Center),
        rows[4],
    );
}

fn centered_row(area: Rect) -> Rect {
    Rect {
        y: area.y + area.height / 2,
        height: area.height.min(1),
        ..area
    }
}
