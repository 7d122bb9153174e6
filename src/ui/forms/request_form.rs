//! Interview request form view

use super::field_renderer::{draw_field, draw_help_text, FieldView};
use crate::app::App;
use crate::content::FORM_TITLE;
use crate::platform::{PASTE_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{EmploymentType, Field, FormSlot, RequestForm, QUESTIONS_MAX_CHARS};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Screen area of every form slot, indexed like [`FormSlot::ALL`]
pub fn slot_areas(area: Rect) -> [Rect; 8] {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(12),            // Fields
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(1),             // Help
            Constraint::Min(0),
        ])
        .margin(1)
        .split(inner);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .spacing(1)
        .split(rows[0]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3); 4])
        .split(columns[0]);
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Employment
            Constraint::Length(6), // Questions
            Constraint::Length(3), // Attachment
        ])
        .split(columns[1]);

    let submit = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(28),
            Constraint::Min(0),
        ])
        .split(rows[1])[1];

    [
        left[0], left[1], left[2], left[3], right[0], right[1], right[2], submit,
    ]
}

fn help_area(area: Rect) -> Rect {
    let slots = slot_areas(area);
    Rect {
        y: slots[7].y + slots[7].height,
        height: 1,
        ..Block::default().borders(Borders::ALL).inner(area)
    }
}

/// Draw the interview request form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;

    let block = Block::default()
        .title(format!(" {FORM_TITLE} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let areas = slot_areas(area);
    for slot in FormSlot::ALL {
        let slot_area = areas[slot.index()];
        match slot {
            FormSlot::EmploymentType => draw_employment_type(frame, slot_area, form),
            FormSlot::Attachment => draw_attachment(frame, slot_area, form),
            FormSlot::Submit => {
                let label = if form.is_in_flight() {
                    "Sending…".to_string()
                } else if form.errors().is_empty() {
                    slot.label().to_string()
                } else {
                    format!("{} ({} to fix)", slot.label(), form.errors().len())
                };
                render_action_button(
                    frame,
                    slot_area,
                    &label,
                    form.active_slot() == slot,
                    form.can_submit(),
                    Some(Color::Green),
                );
            }
            _ => draw_text_slot(frame, slot_area, form, slot),
        }
    }

    let help = match form.active_slot() {
        FormSlot::EmploymentType => {
            format!("←/→ or 1-3:choose  Tab:next  {SUBMIT_SHORTCUT}:send  Esc:back")
        }
        FormSlot::Questions => {
            format!("Enter:new line  Tab:next  {SUBMIT_SHORTCUT}:send  Esc:back")
        }
        FormSlot::Attachment => {
            "Enter:attach path  Del:remove  drop a file to attach  Esc:back".to_string()
        }
        FormSlot::Submit => "Enter:send  Shift+Tab:prev  Esc:back".to_string(),
        _ => format!("Tab:next  {PASTE_SHORTCUT}:paste  {SUBMIT_SHORTCUT}:send  Esc:back"),
    };
    draw_help_text(frame, help_area(area), &help);
}

fn draw_text_slot(frame: &mut Frame, area: Rect, form: &RequestForm, slot: FormSlot) {
    let value = form.slot_text(slot);
    let field = slot.field();
    let note = (slot == FormSlot::Questions)
        .then(|| format!("{}/{}", form.draft().questions_len(), QUESTIONS_MAX_CHARS));

    draw_field(
        frame,
        area,
        FieldView {
            placeholder: slot.placeholder(),
            is_active: form.active_slot() == slot,
            is_multiline: slot.is_multiline(),
            marker: field.and_then(|f| form.field_marker(f)),
            error: field.and_then(|f| form.visible_error(f)),
            note,
            ..FieldView::new(slot.label(), &value)
        },
    );
}

fn draw_employment_type(frame: &mut Frame, area: Rect, form: &RequestForm) {
    let slot = FormSlot::EmploymentType;
    let is_active = form.active_slot() == slot;
    let selected = form.draft().employment_type;

    let mut spans = Vec::new();
    for (i, kind) in EmploymentType::ALL.iter().enumerate() {
        let chosen = selected == Some(*kind);
        let style = match (chosen, is_active) {
            (true, true) => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            (true, false) => Style::default().fg(Color::White),
            (false, _) => Style::default().fg(Color::DarkGray),
        };
        let radio = if chosen { "(•)" } else { "( )" };
        spans.push(Span::styled(format!("{radio} {}", kind.label()), style));
        if i + 1 < EmploymentType::ALL.len() {
            spans.push(Span::raw("  "));
        }
    }

    let error = form.visible_error(Field::EmploymentType);
    let border = if error.is_some() {
        Color::Red
    } else if is_active {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let mut block = Block::default()
        .title(format!(" {} ", slot.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    if let Some(error) = error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {error} "),
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn draw_attachment(frame: &mut Frame, area: Rect, form: &RequestForm) {
    let slot = FormSlot::Attachment;
    let is_active = form.active_slot() == slot;

    match form.attachment() {
        Some(attachment) if form.path_input().is_empty() => {
            let border = if is_active { Color::Cyan } else { Color::DarkGray };
            let line = Line::from(vec![
                Span::styled("📄 ", Style::default().fg(Color::Green)),
                Span::styled(attachment.name.as_str(), Style::default().fg(Color::White)),
                Span::styled(
                    format!(" ({})", attachment.display_size()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]);
            let block = Block::default()
                .title(format!(" {} ", slot.label()))
                .title_bottom(Line::from(" Del:remove ").right_aligned())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border));
            frame.render_widget(Paragraph::new(line).block(block), area);
        }
        held => {
            let value = form.slot_text(slot);
            let note = held.map(|a| format!("replaces {}", a.name));
            draw_field(
                frame,
                area,
                FieldView {
                    placeholder: slot.placeholder(),
                    is_active,
                    note,
                    ..FieldView::new(slot.label(), &value)
                },
            );
        }
    }
}
