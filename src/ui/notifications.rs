//! Toast notification rendering
//!
//! Toasts stack in the top-right corner in arrival order, newest last,
//! and slide in from the right edge with an eased animation.

use crate::app::App;
use crate::state::Severity;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use std::time::{Duration, Instant};

/// Full width of a toast when fully slid in
const TOAST_WIDTH: u16 = 42;
/// Rows per toast (border + text + border)
const TOAST_HEIGHT: u16 = 3;
/// Duration of the slide-in animation
pub const SLIDE_DURATION: Duration = Duration::from_millis(400);

pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let now = Instant::now();

    for (i, notification) in app.state.notifications.iter().enumerate() {
        let y = area.y + 1 + (i as u16) * (TOAST_HEIGHT + 1);
        if y + TOAST_HEIGHT > area.bottom() {
            break;
        }

        // Slide in from the right edge over SLIDE_DURATION
        let progress = (notification.age(now).as_secs_f32() / SLIDE_DURATION.as_secs_f32())
            .clamp(0.0, 1.0);
        let eased = simple_easing::cubic_out(progress);
        let visible = ((TOAST_WIDTH as f32) * eased).round() as u16;
        if visible == 0 {
            continue;
        }

        let width = visible.min(area.width.saturating_sub(1));
        let toast_area = Rect {
            x: area.right().saturating_sub(width + 1),
            y,
            width,
            height: TOAST_HEIGHT,
        };

        let (bg, border) = match notification.severity {
            Severity::Danger => (Color::Red, Color::LightRed),
            Severity::Info => (Color::Green, Color::LightGreen),
        };

        let paragraph = Paragraph::new(Line::from(notification.text.clone()))
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(Color::White).bg(bg))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border).bg(bg)),
            );

        frame.render_widget(Clear, toast_area);
        frame.render_widget(paragraph, toast_area);
    }
}

/// Whether any toast is still animating, so the event loop can poll fast
pub fn is_animating(app: &App, now: Instant) -> bool {
    app.state
        .notifications
        .iter()
        .any(|n| n.age(now) < SLIDE_DURATION)
}
