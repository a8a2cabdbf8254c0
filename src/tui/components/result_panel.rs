//! Final price, savings, and copy button.

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

pub fn render_result_panel(frame: &mut Frame, area: Rect, app: &mut App) {
    let has_result = app.result.is_some();

    let final_style = if has_result {
        Style::new().fg(TEXT_WHITE).bold()
    } else {
        Style::new().fg(TEXT_DIM)
    };

    let button = "[ Copiar precio final ]";
    let button_style = if has_result {
        Style::new().fg(Color::Black).bg(LOGO_MINT).bold()
    } else {
        Style::new().fg(TEXT_DIM)
    };

    let lines = vec![
        Line::styled("Precio final", Style::new().fg(TEXT_DIM)),
        Line::styled(app.final_text(), final_style),
        Line::from(vec![
            Span::styled("Ahorras: ", Style::new().fg(TEXT_DIM)),
            Span::styled(app.saved_text(), Style::new().fg(TEXT_WHITE)),
        ]),
        Line::raw(""),
        Line::styled(button, button_style).centered(),
    ];

    frame.render_widget(Paragraph::new(lines), area);

    // The copy button only responds while there is something to copy
    if has_result {
        let width = button.chars().count() as u16;
        let x = area.x + area.width.saturating_sub(width) / 2;
        app.interactions.register_click(
            "copy_button",
            ClickRegion::new(x, area.y + 4, width, 1),
            Action::CopyFinalPrice,
        );
    }
}
