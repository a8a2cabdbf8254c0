//! Keyboard event handling by input mode.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, InputMode};

use super::Action;

/// Handle keyboard events and return the appropriate action.
pub fn handle_key_event(app: &App, key: KeyEvent) -> Action {
    match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::Insert => handle_insert_mode(key),
        InputMode::Help => handle_help_mode(key),
    }
}

fn handle_normal_mode(app: &App, key: KeyEvent) -> Action {
    let extent = app.picker.item_extent();

    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('?') => Action::OpenHelp,

        // Edit the price
        KeyCode::Char('i') | KeyCode::Enter => Action::EnterInsertMode,

        // Turn the wheel one item per keypress
        KeyCode::Char('j') | KeyCode::Down => Action::WheelScroll(extent),
        KeyCode::Char('k') | KeyCode::Up => Action::WheelScroll(-extent),
        KeyCode::PageDown => Action::WheelScroll(extent * 5.0),
        KeyCode::PageUp => Action::WheelScroll(-extent * 5.0),

        // Copy the final price
        KeyCode::Char('c') => Action::CopyFinalPrice,

        // Quick-select by number (0 resets, 1-8 pick from the quick row)
        KeyCode::Char('0') => Action::QuickSelect(app.picker.range().min()),
        KeyCode::Char(c @ '1'..='9') => {
            let idx = (c as usize) - ('1' as usize);
            match app.quick_values.get(idx) {
                Some(&pct) => Action::QuickSelect(pct),
                None => Action::None,
            }
        }

        _ => Action::None,
    }
}

fn handle_insert_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => Action::ExitInsertMode,

        // Ctrl+C: clear input but stay in insert mode
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::ClearInput,

        // Line navigation, emacs style included
        KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::InputHome,
        KeyCode::Char('e') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::InputEnd,
        KeyCode::Home => Action::InputHome,
        KeyCode::End => Action::InputEnd,
        KeyCode::Left => Action::InputLeft,
        KeyCode::Right => Action::InputRight,

        KeyCode::Backspace => Action::InputBackspace,
        KeyCode::Delete => Action::InputDelete,

        KeyCode::Char(c) => Action::InputChar(c),

        _ => Action::None,
    }
}

fn handle_help_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Action::CloseHelp,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_normal_mode_wheel_keys() {
        let app = App::new(&Config::default(), None, true);
        let extent = app.picker.item_extent();
        assert_eq!(
            handle_key_event(&app, key(KeyCode::Char('j'))),
            Action::WheelScroll(extent)
        );
        assert_eq!(
            handle_key_event(&app, key(KeyCode::Up)),
            Action::WheelScroll(-extent)
        );
    }

    #[test]
    fn test_quick_select_numbers() {
        let app = App::new(&Config::default(), None, true);
        assert_eq!(
            handle_key_event(&app, key(KeyCode::Char('3'))),
            Action::QuickSelect(30)
        );
        assert_eq!(
            handle_key_event(&app, key(KeyCode::Char('0'))),
            Action::QuickSelect(0)
        );
        // Only eight quick values by default
        assert_eq!(handle_key_event(&app, key(KeyCode::Char('9'))), Action::None);
    }

    #[test]
    fn test_insert_mode_typing() {
        let mut app = App::new(&Config::default(), None, true);
        app.enter_insert_mode();
        assert_eq!(
            handle_key_event(&app, key(KeyCode::Char('5'))),
            Action::InputChar('5')
        );
        assert_eq!(handle_key_event(&app, ctrl('c')), Action::ClearInput);
        assert_eq!(
            handle_key_event(&app, key(KeyCode::Esc)),
            Action::ExitInsertMode
        );
    }
}
