//! User interface rendering.

mod browser;
mod formatters;
mod keymap_bar;
mod status_bar;
mod theme;

use crate::app::App;
use ratatui::Frame;

pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &App) {
    browser::draw_browser(f, app);
}
