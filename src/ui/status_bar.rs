//! Status bar UI component.

use crate::app::App;
use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the status bar.
pub(super) fn draw_status(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let paragraph = Paragraph::new(status_text(app))
        .style(Style::default().fg(colors.status_fg).bg(colors.status_bg));

    f.render_widget(paragraph, area);
}

fn status_text(app: &App) -> String {
    let summary = app.summary();
    format!(
        " {} | {}/{} active | T {} °C | S {} PSU | {}",
        summary.provenance,
        summary.active_count,
        summary.total_count,
        summary.temperature_range,
        summary.salinity_range,
        app.status
    )
}
