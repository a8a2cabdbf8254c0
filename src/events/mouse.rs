//! Mouse event handling.
//!
//! Clicks and scrolls are dispatched through the interaction registry,
//! which is populated by UI components during each render. Drags over the
//! wheel are routed directly so the app can track the anchor row.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::app::App;

use super::Action;

/// Handle mouse events and return the appropriate action.
pub fn handle_mouse_event(app: &App, mouse: MouseEvent) -> Action {
    let x = mouse.column;
    let y = mouse.row;

    match mouse.kind {
        MouseEventKind::ScrollUp => app.interactions.handle_scroll_up(x, y),
        MouseEventKind::ScrollDown => app.interactions.handle_scroll_down(x, y),
        MouseEventKind::Down(MouseButton::Left) => app.interactions.handle_click(x, y),
        MouseEventKind::Drag(MouseButton::Left) if app.wheel_area.contains(x, y) => {
            Action::WheelDragMove(y)
        }
        MouseEventKind::Up(MouseButton::Left) => Action::WheelDragEnd,
        _ => Action::None,
    }
}
