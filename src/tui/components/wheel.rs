//! Infinite-scroll percentage wheel.
//!
//! Shows five rows of the dial with the selected value in a center band,
//! like a phone time picker. Scroll and drag regions are registered here so
//! mouse input over the wheel drives the picker.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{App, ClickRegion};
use crate::events::Action;
use crate::tui::theme::*;

/// Rows shown above and below the selected value.
const WHEEL_RADIUS: usize = 2;

pub fn render_wheel(frame: &mut Frame, area: Rect, app: &mut App) {
    let extent = app.picker.item_extent();

    let mut lines = vec![Line::from(vec![
        Span::styled("Descuento", Style::new().fg(TEXT_DIM)),
        Span::raw("  "),
        Span::styled(format!("{}%", app.pct()), Style::new().fg(LOGO_GOLD).bold()),
    ])];

    // The band flashes briefly when a new value is dispatched
    let band_fg = if app.feedback.pulse_active() {
        LOGO_GOLD
    } else {
        TEXT_WHITE
    };

    for (row, value) in app.picker.window(WHEEL_RADIUS).into_iter().enumerate() {
        let text = format!("{} %", value);
        let line = if row == WHEEL_RADIUS {
            Line::styled(
                format!("  {:^width$}  ", text, width = area.width.saturating_sub(4) as usize),
                Style::new().fg(band_fg).bg(BAND_BG).bold(),
            )
            .centered()
        } else {
            // Fade toward the edges of the dial
            let style = if row.abs_diff(WHEEL_RADIUS) == 1 {
                Style::new().fg(TEXT_DIM)
            } else {
                Style::new().fg(TEXT_DIM).dim()
            };
            Line::styled(text, style).centered()
        };
        lines.push(line);
    }

    frame.render_widget(Paragraph::new(lines), area);

    // Mouse: one wheel notch turns the dial one item; drags are routed to
    // the app through this region
    let rows = ClickRegion::new(area.x, area.y + 1, area.width, (2 * WHEEL_RADIUS + 1) as u16);
    app.wheel_area = rows;
    app.interactions.register_scroll(
        "wheel",
        rows,
        Action::WheelScroll(-extent),
        Action::WheelScroll(extent),
    );
}
