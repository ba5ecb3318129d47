//! UI module for rendering the TUI

mod form;
mod notifications;
mod thank_you;

pub use notifications::is_animating;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    match app.state.current_view {
        View::Form => form::draw(frame, area, app),
        View::ThankYou => thank_you::draw(frame, area),
    }

    // Toasts overlay whatever view is active
    notifications::draw(frame, app);
}
