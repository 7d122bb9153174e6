//! Field rendering utilities for forms

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Everything needed to draw one input box
pub struct FieldView<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub placeholder: &'a str,
    pub is_active: bool,
    pub is_multiline: bool,
    /// `Some(true)` valid, `Some(false)` invalid, `None` nothing to judge yet
    pub marker: Option<bool>,
    pub error: Option<&'a str>,
    /// Right-aligned note in the bottom border, e.g. a character counter
    pub note: Option<String>,
}

impl<'a> FieldView<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            placeholder: "",
            is_active: false,
            is_multiline: false,
            marker: None,
            error: None,
            note: None,
        }
    }
}

/// Draw a bordered input with its marker, inline error and cursor
pub fn draw_field(frame: &mut Frame, area: Rect, field: FieldView) {
    let border_style = match (field.is_active, field.error) {
        (_, Some(_)) => Style::default().fg(Color::Red),
        (true, None) => Style::default().fg(Color::Cyan),
        (false, None) => Style::default().fg(Color::DarkGray),
    };

    let cursor = if field.is_active { "▌" } else { "" };
    let cursor_style = Style::default().fg(Color::Cyan);

    let content = if field.value.is_empty() {
        Paragraph::new(Line::from(vec![
            Span::styled(cursor, cursor_style),
            Span::styled(field.placeholder, Style::default().fg(Color::DarkGray)),
        ]))
    } else if field.is_multiline {
        let mut lines: Vec<Line> = field
            .value
            .split('\n')
            .map(|l| Line::from(l.to_string()))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans.push(Span::styled(cursor, cursor_style));
        }
        Paragraph::new(lines)
    } else {
        let style = if field.is_active {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Gray)
        };
        Paragraph::new(Line::from(vec![
            Span::styled(field.value, style),
            Span::styled(cursor, cursor_style),
        ]))
    };

    let mut title = vec![Span::raw(format!(" {} ", field.label))];
    match field.marker {
        Some(true) => title.push(Span::styled("✓ ", Style::default().fg(Color::Green))),
        Some(false) => title.push(Span::styled("✗ ", Style::default().fg(Color::Red))),
        None => {}
    }

    let mut block = Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_style(border_style);
    if let Some(error) = field.error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {error} "),
            Style::default().fg(Color::Red).add_modifier(Modifier::ITALIC),
        )));
    }
    if let Some(note) = field.note {
        block = block.title_bottom(Line::from(format!(" {note} ")).right_aligned());
    }

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Draw a one-line key hint under a form
pub fn draw_help_text(frame: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(help, area);
}
