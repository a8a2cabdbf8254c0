use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{App, InputMode};
use super::components::{
    render_help_popup, render_price_input, render_quick_select, render_result_panel, render_toast,
    render_wheel,
};
use super::theme::*;

/// Width of the centered content column (phone-card proportions).
const COLUMN_WIDTH: u16 = 42;

pub fn render(frame: &mut Frame, app: &mut App) {
    // Interactive regions are rebuilt from scratch on every render
    app.interactions.clear();

    let area = frame.area();

    // Main vertical layout: logo, content, hotkeys
    let main_layout = Layout::vertical([
        Constraint::Length(2), // Logo + spacing
        Constraint::Min(0),    // Content
        Constraint::Length(1), // Hotkeys
    ])
    .split(area);

    render_logo(frame, main_layout[0]);

    let column = centered_column(main_layout[1], COLUMN_WIDTH);

    let sections = Layout::vertical([
        Constraint::Length(4), // Price input
        Constraint::Length(7), // Wheel
        Constraint::Length(2), // Quick select
        Constraint::Length(5), // Result panel
        Constraint::Min(0),
    ])
    .split(column);

    render_price_input(frame, sections[0], app);
    render_wheel(frame, sections[1], app);
    render_quick_select(frame, sections[2], app);
    render_result_panel(frame, sections[3], app);

    if app.input_mode == InputMode::Help {
        render_help_popup(frame, main_layout[1]);
    }

    render_toast(frame, area, app);
    render_hotkeys(frame, main_layout[2], app);
}

fn centered_column(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}

fn render_logo(frame: &mut Frame, area: Rect) {
    // Center the colorful "rebaja" logo
    let padding = (area.width.saturating_sub(6)) / 2;
    let centered = Line::from(vec![
        Span::raw(" ".repeat(padding as usize)),
        Span::styled("r", Style::new().fg(LOGO_CORAL).bold()),
        Span::styled("e", Style::new().fg(LOGO_GOLD).bold()),
        Span::styled("b", Style::new().fg(LOGO_LIGHT_BLUE).bold()),
        Span::styled("a", Style::new().fg(LOGO_MINT).bold()),
        Span::styled("j", Style::new().fg(LOGO_CORAL).bold()),
        Span::styled("a", Style::new().fg(LOGO_GOLD).bold()),
    ]);

    frame.render_widget(Paragraph::new(centered), area);
}

fn render_hotkeys(frame: &mut Frame, area: Rect, app: &App) {
    let text = match app.input_mode {
        InputMode::Insert => " Esc/Enter terminar · Ctrl+C borrar",
        InputMode::Help => " Esc cerrar",
        InputMode::Normal => " i editar · j/k girar · 1-8 rápido · c copiar · ? ayuda · q salir",
    };
    frame.render_widget(
        Paragraph::new(Line::styled(text, Style::new().fg(TEXT_DIM))),
        area,
    );
}
