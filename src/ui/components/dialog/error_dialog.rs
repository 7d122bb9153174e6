//! Error dialog component

use super::base::{render_dialog, DialogConfig};
use crate::state::Notification;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render an error notification as a dialog centered on the screen
pub fn render_error_dialog(frame: &mut Frame, error: &Notification) {
    let key = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::raw("Press "),
        Span::styled("Enter", key),
        Span::raw(" or "),
        Span::styled("Esc", key),
        Span::raw(" to dismiss"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: &error.title,
            accent: Color::Red,
            message: error.detail.as_deref().unwrap_or_default(),
            hint: Some(hint),
            max_width: 60,
        },
    );
}
