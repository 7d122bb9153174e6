//! Live news feed

use crate::app::App;
use crate::content::{NEWS, NEWS_DETAIL, NEWS_TITLE};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Areas of the news cards inside the view
pub fn card_areas(area: Rect) -> Vec<Rect> {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    let row = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(12), Constraint::Min(0)])
        .margin(1)
        .split(inner)[0];
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, NEWS.len() as u32); NEWS.len()])
        .spacing(1)
        .split(row)
        .to_vec()
}

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(format!(" {NEWS_TITLE} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    for (i, (item, card_area)) in NEWS.iter().zip(card_areas(area)).enumerate() {
        let active = app.state.news.is_active(i);
        let border = if active { Color::Cyan } else { Color::DarkGray };

        let mut lines = vec![Line::from(Span::styled(
            item.title,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))];
        if active {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                NEWS_DETAIL,
                Style::default().fg(Color::Gray),
            )));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Read the article ›",
                Style::default().fg(Color::Cyan),
            )));
        }

        let card = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        );
        frame.render_widget(card, card_area);
    }
}
