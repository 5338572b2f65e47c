//! UI module for rendering the TUI

mod forms;
mod home;
mod layout;
mod palette;

use crate::app::App;
use ratatui::widgets::Block;
use ratatui::Frame;

pub use forms::max_form_scroll;
pub use home::max_history_scroll;
pub use palette::Palette;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let theme = app.state.document.theme().unwrap_or_default();
    let palette = Palette::for_theme(theme);
    let area = frame.area();

    frame.render_widget(Block::default().style(palette.base()), area);

    let (sidebar_area, main_area) = layout::create_layout(area);
    layout::draw_sidebar(frame, sidebar_area, app, &palette);

    match &app.state.form {
        Some(form) => forms::draw_form(frame, main_area, app, form, &palette),
        None => home::draw(frame, main_area, app, &palette),
    }

    layout::draw_status_bar(frame, app, &palette);
}
