//! Transient bottom notification.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Clear, Paragraph},
};

use crate::app::App;
use crate::tui::theme::*;

/// Render the toast centered near the bottom of the screen. The app expires
/// it on the frame tick; this only draws whatever is currently set.
pub fn render_toast(frame: &mut Frame, area: Rect, app: &App) {
    let Some(toast) = &app.toast else {
        return;
    };

    let width = (toast.message.chars().count() as u16 + 4).min(area.width);
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = (area.y + area.height).saturating_sub(4);
    let popup = Rect::new(x, y, width, 1);

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(
            Line::styled(
                format!("  {}  ", toast.message),
                Style::new().fg(TEXT_WHITE).bg(BAND_BG),
            )
            .centered(),
        ),
        popup,
    );
}
