//! UI module for rendering the TUI

mod components;
pub mod forms;
pub mod hero;
mod layout;
pub mod news;
mod splash;
mod values;

use crate::app::App;
use crate::state::View;
use components::render_error_dialog;
use ratatui::Frame;

pub use layout::{create_layout, sidebar_button_areas};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if let (View::Splash, Some(splash)) = (app.state.current_view, &app.splash_state) {
        splash::draw(frame, area, splash);
        return;
    }

    let (sidebar_area, main_area) = layout::create_layout(area);
    layout::draw_sidebar(frame, sidebar_area, app);

    match app.state.current_view {
        View::Splash | View::Hero => hero::draw(frame, main_area, app),
        View::Values => values::draw(frame, main_area, app),
        View::News => news::draw(frame, main_area, app),
        View::InterviewForm => forms::draw_request_form(frame, main_area, app),
    }

    layout::draw_status_bar(frame, app);

    // Modal errors on top of everything
    if let Some(error) = app.state.current_error() {
        render_error_dialog(frame, error);
    }
}
