//! Quick-select percentage button row.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{App, ClickRegion};
use crate::events::Action;
use crate::tui::theme::*;

/// Render the row of fixed percentages. Each button takes the programmatic
/// set-value path, so an already-visible value does not jerk the wheel.
pub fn render_quick_select(frame: &mut Frame, area: Rect, app: &mut App) {
    let labels: Vec<String> = app
        .quick_values
        .iter()
        .map(|v| format!(" {}% ", v))
        .collect();
    let total: u16 = labels.iter().map(|l| l.chars().count() as u16 + 1).sum();
    let mut x = area.x + area.width.saturating_sub(total) / 2;

    let mut spans: Vec<Span> = vec![Span::raw(" ".repeat(x.saturating_sub(area.x) as usize))];

    for (label, &value) in labels.iter().zip(&app.quick_values) {
        let selected = app.pct() == value;
        let style = if selected {
            Style::new().fg(Color::Black).bg(LOGO_GOLD).bold()
        } else {
            Style::new().fg(TEXT_DIM)
        };
        spans.push(Span::styled(label.clone(), style));
        spans.push(Span::raw(" "));

        let width = label.chars().count() as u16;
        app.interactions.register_click(
            "quick_select",
            ClickRegion::new(x, area.y, width, 1),
            Action::QuickSelect(value),
        );
        x += width + 1;
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
