//! Help popup component.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::tui::theme::*;

fn entry(keys: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<10}", keys), Style::new().fg(TEXT_WHITE)),
        Span::styled(description, Style::new().fg(TEXT_DIM)),
    ])
}

/// Render the help popup with keyboard shortcuts.
pub fn render_help_popup(frame: &mut Frame, area: Rect) {
    let popup_width = 44u16;
    let popup_height = 14u16;
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(
        x,
        y,
        popup_width.min(area.width),
        popup_height.min(area.height),
    );

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let lines: Vec<Line> = vec![
        Line::from(vec![Span::styled(
            "Atajos de teclado",
            Style::new().fg(TEXT_WHITE).bold(),
        )]),
        Line::raw(""),
        entry("i / Enter", "Editar el precio"),
        entry("Esc", "Terminar la edición"),
        entry("j / k", "Girar la rueda"),
        entry("PgUp/PgDn", "Girar cinco pasos"),
        entry("1-8", "Descuento rápido"),
        entry("0", "Sin descuento"),
        entry("c", "Copiar precio final"),
        entry("?", "Mostrar/ocultar ayuda"),
        entry("q", "Salir"),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::new().fg(TEXT_DIM)),
    );

    frame.render_widget(paragraph, popup_area);
}
