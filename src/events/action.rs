//! Action enum for decoupling input handling from state changes.
//!
//! Actions represent user intents that can be logged, replayed, or
//! customized.

/// Actions that can be dispatched from event handlers.
///
/// These represent user intents and are processed by the App to update
/// state.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // === Application ===
    /// Quit the application
    Quit,

    // === Mode switching ===
    /// Enter insert mode to edit the price
    EnterInsertMode,
    /// Exit to normal mode
    ExitInsertMode,
    /// Open help popup
    OpenHelp,
    /// Close help popup
    CloseHelp,

    // === Price input ===
    /// Add character to the price field
    InputChar(char),
    /// Delete character before cursor
    InputBackspace,
    /// Delete character at cursor
    InputDelete,
    /// Move cursor left
    InputLeft,
    /// Move cursor right
    InputRight,
    /// Move cursor to start
    InputHome,
    /// Move cursor to end
    InputEnd,
    /// Clear the price field (Ctrl+C)
    ClearInput,

    // === Wheel ===
    /// Raw scroll input, in the wheel's extent units
    WheelScroll(f64),
    /// Drag position update over the wheel (terminal row)
    WheelDragMove(u16),
    /// Drag released
    WheelDragEnd,
    /// Assign a percentage directly (quick-select path)
    QuickSelect(i32),

    // === Copy flow ===
    /// Copy the final price to the clipboard
    CopyFinalPrice,

    // === No-op ===
    /// No action to take
    None,
}
