//! Program output pane: the character grid written by `print`

use crate::display::ScreenBuffer;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::Paragraph,
    Frame,
};

/// Render the grid with its top-left cell at the pane's top-left corner.
///
/// `scroll` is the (row, col) offset of the view; it is clamped so the view
/// never scrolls past the written area.
pub fn render_screen_pane(
    frame: &mut Frame,
    area: Rect,
    screen: &ScreenBuffer,
    scroll: &mut (usize, usize),
) {
    let visible_height = area.height.max(1) as usize;
    let visible_width = area.width.max(1) as usize;

    scroll.0 = scroll.0.min(screen.height().saturating_sub(visible_height));
    scroll.1 = scroll.1.min(screen.width().saturating_sub(visible_width));

    let last_row = (scroll.0 + visible_height).min(screen.height());
    let lines: Vec<Line> = (scroll.0..last_row)
        .map(|row| {
            let text: String = screen
                .line(row)
                .chars()
                .skip(scroll.1)
                .take(visible_width)
                .collect();
            Line::from(text)
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(DEFAULT_THEME.fg).bg(DEFAULT_THEME.bg));
    frame.render_widget(paragraph, area);
}
