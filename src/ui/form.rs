//! Contact form rendering

use crate::app::App;
use crate::state::{Control, Field};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows a field occupies, including its inline error line when present
fn field_height(field: &Field) -> u16 {
    let base = match field.control {
        Control::Text { multiline: true } => 6,
        _ => 3,
    };
    base + u16::from(field.error.is_some())
}

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;

    let mut constraints = vec![Constraint::Length(2)];
    constraints.extend(form.fields.iter().map(|f| Constraint::Length(field_height(f))));
    constraints.push(Constraint::Length(3)); // submit button
    constraints.push(Constraint::Min(0));

    let rows = Layout::vertical(constraints)
        .horizontal_margin(2)
        .vertical_margin(1)
        .split(area);

    let header = Paragraph::new(Line::from(Span::styled(
        "Contact us",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(header, rows[0]);

    for (i, field) in form.fields.iter().enumerate() {
        let is_active = form.active_index == i && !form.is_submitting();
        draw_field(frame, rows[i + 1], field, is_active);
    }

    let button_area = rows[form.fields.len() + 1];
    draw_submit_button(frame, button_area, app);
}

fn draw_field(frame: &mut Frame, area: Rect, field: &Field, is_active: bool) {
    let border_style = if field.error.is_some() {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let value_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let cursor = if is_active { "▌" } else { "" };

    let mut lines: Vec<Line> = match field.control {
        Control::Checkbox => {
            let mark = if field.is_checked() { "[x]" } else { "[ ]" };
            vec![Line::from(vec![
                Span::styled(format!("{mark} "), value_style),
                Span::raw(field.label.clone()),
                Span::styled(cursor, Style::default().fg(Color::Cyan)),
            ])]
        }
        _ => {
            let mut lines: Vec<Line> = field
                .as_text()
                .lines()
                .map(|l| Line::from(Span::styled(l.to_string(), value_style)))
                .collect();
            if lines.is_empty() {
                lines.push(Line::from(""));
            }
            if is_active {
                if let Some(last) = lines.last_mut() {
                    last.spans
                        .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
                }
            }
            lines
        }
    };

    if let Some(error) = &field.error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        )));
    }

    let title = match field.control {
        Control::Checkbox => String::new(),
        _ if field.required => format!(" {} * ", field.label),
        _ => format!(" {} ", field.label),
    };

    let mut block = Block::default().borders(Borders::ALL).border_style(border_style);
    if !title.is_empty() {
        block = block.title(title);
    }

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}

fn draw_submit_button(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let is_selected = form.is_button_row_active() && !form.is_submitting();

    let border_style = if is_selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text_style = if form.is_submitting() {
        Style::default().fg(Color::DarkGray)
    } else if is_selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let content = if form.is_submitting() {
        "Sending..."
    } else {
        "Send message"
    };

    let paragraph = Paragraph::new(format!(" {content} ")).style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}
