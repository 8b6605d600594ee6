//! Keymap help bar UI component.

use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

const KEYMAP: &str = "q:quit | jk/↑↓:nav | gg/G:first/last | t:details | c:chart | y:copy | T:theme";

/// Draw the keymap help bar.
pub(super) fn draw_keymap(f: &mut Frame<'_>, area: Rect, colors: &ThemeColors) {
    let paragraph = Paragraph::new(KEYMAP).style(Style::default().fg(colors.text).bg(colors.bg));

    f.render_widget(paragraph, area);
}
