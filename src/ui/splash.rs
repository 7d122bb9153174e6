//! Intro banner rendering with ASCII art logo

use crate::content::TAGLINE;
use crate::state::SplashState;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const LOGO: [&str; 5] = [
    r"  ____ _____ _   _ ____    _    _     _____ ",
    r" / ___| ____| \ | |  _ \  / \  | |   |  ___|",
    r"| |  _|  _| |  \| | | | |/ _ \ | |   | |_   ",
    r"| |_| | |___| |\  | |_| / ___ \| |___|  _|  ",
    r" \____|_____|_| \_|____/_/   \_\_____|_|    ",
];

/// Build the banner: logo plus tagline
fn build_banner() -> Vec<Line<'static>> {
    let style = Style::default().fg(Color::Cyan);
    let mut lines: Vec<Line> = LOGO
        .iter()
        .map(|row| Line::from(Span::styled(*row, style)))
        .collect();
    lines.push(Line::from(""));
    lines.push(
        Line::from(Span::styled(
            TAGLINE,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::ITALIC),
        ))
        .centered(),
    );
    lines
}

/// Draw the intro banner
pub fn draw(frame: &mut Frame, area: Rect, splash_state: &SplashState) {
    let lines = build_banner();

    let logo_height = lines.len() as u16;
    let logo_width = LOGO[0].len() as u16;

    // Offset may push the banner above the screen
    let base_y = area.y as i32 + (area.height.saturating_sub(logo_height)) as i32 / 2;
    let y_pos = base_y - splash_state.scroll_offset as i32;
    let x = area.x + (area.width.saturating_sub(logo_width)) / 2;

    let lines_off_top = if y_pos < 0 { (-y_pos) as usize } else { 0 };
    if lines_off_top >= lines.len() {
        return;
    }

    let visible_lines: Vec<Line> = lines.into_iter().skip(lines_off_top).collect();
    let visible_height = visible_lines.len() as u16;
    let render_y = if y_pos < 0 { area.y } else { y_pos as u16 };

    let logo_area = Rect {
        x,
        y: render_y,
        width: logo_width.min(area.width),
        height: visible_height.min(area.height.saturating_sub(render_y - area.y)),
    };
    frame.render_widget(Paragraph::new(visible_lines), logo_area);

    // Skip hint only while the banner is still
    if splash_state.scroll_offset < 1.0 && area.height > 2 {
        let hint = "Press any key to skip";
        let hint_area = Rect {
            x: area.x + (area.width.saturating_sub(hint.len() as u16)) / 2,
            y: area.y + area.height - 2,
            width: (hint.len() as u16).min(area.width),
            height: 1,
        };
        let hint_line = Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray)));
        frame.render_widget(Paragraph::new(hint_line), hint_area);
    }
}
