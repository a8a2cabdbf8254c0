//! Original price text field with format hint.

use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{App, ClickRegion, InputMode};
use crate::events::Action;
use crate::tui::theme::*;

/// Render the price field. Clicking the input line enters insert mode; in
/// insert mode the terminal cursor sits inside the field.
pub fn render_price_input(frame: &mut Frame, area: Rect, app: &mut App) {
    let is_insert = app.input_mode == InputMode::Insert;

    let prompt_style = if is_insert {
        Style::new().fg(LOGO_MINT)
    } else {
        Style::new().fg(TEXT_DIM)
    };
    let input_style = if is_insert {
        Style::new().fg(TEXT_WHITE)
    } else {
        Style::new().fg(TEXT_WHITE).dim()
    };

    let shown = if app.price_input.is_empty() && !is_insert {
        Span::styled("0,00", Style::new().fg(TEXT_DIM))
    } else {
        Span::styled(app.price_input.clone(), input_style)
    };

    let mut lines = vec![
        Line::styled("Precio original", Style::new().fg(TEXT_DIM)),
        Line::from(vec![
            Span::styled("> ", prompt_style),
            shown,
            Span::styled(" €", Style::new().fg(TEXT_DIM)),
        ]),
    ];

    if app.show_format_hint() {
        lines.push(Line::styled(
            "Usa coma o punto para decimales.",
            Style::new().fg(LOGO_GOLD),
        ));
    }

    frame.render_widget(Paragraph::new(lines), area);

    // Place the terminal cursor inside the field while editing
    if is_insert {
        let cursor_cols = app.price_input[..app.cursor_position].chars().count() as u16;
        frame.set_cursor_position(Position::new(area.x + 2 + cursor_cols, area.y + 1));
    }

    let input_line = ClickRegion::new(area.x, area.y + 1, area.width, 1);
    app.interactions
        .register_click("price_input", input_line, Action::EnterInsertMode);
}
