use std::time::{Duration, Instant};

use crate::clipboard;
use crate::config::Config;
use crate::error;
use crate::log;
use crate::money::{self, Discount};
use crate::tui::interaction::InteractionRegistry;
use crate::wheel::{DEFAULT_ITEM_EXTENT, FeedbackHooks, WheelParams, WheelPicker};

/// How long a toast stays on screen.
const TOAST_DURATION: Duration = Duration::from_millis(900);

/// Placeholder shown while no valid amount is entered.
pub const EMPTY_AMOUNT: &str = "—";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    Normal, // Navigation mode: keys drive the wheel
    Insert, // Typing mode: keys edit the price field
    Help,   // Help popup showing all hotkeys
}

/// A rectangular screen region used for mouse hit testing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClickRegion {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl ClickRegion {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// Transient message shown near the bottom of the screen.
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    shown_at: Instant,
}

impl Toast {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            shown_at: Instant::now(),
        }
    }

    fn expired(&self) -> bool {
        self.shown_at.elapsed() >= TOAST_DURATION
    }
}

pub struct App {
    pub input_mode: InputMode,
    pub price_input: String,
    pub cursor_position: usize,
    pub picker: WheelPicker,
    pub feedback: FeedbackHooks,
    pub quick_values: Vec<i32>,
    pub result: Option<Discount>,
    pub toast: Option<Toast>,
    pub interactions: InteractionRegistry,
    /// Wheel bounds from the last render, for routing drag events.
    pub wheel_area: ClickRegion,
    drag_anchor: Option<u16>,
}

impl App {
    pub fn new(config: &Config, initial_price: Option<String>, quiet: bool) -> Self {
        let picker = WheelPicker::new(WheelParams {
            min: 0,
            max: config.wheel_max(),
            step: config.wheel_step(),
            initial: config.initial_pct(),
            item_extent: DEFAULT_ITEM_EXTENT,
        });
        let price_input = initial_price.unwrap_or_default();
        let mut app = Self {
            input_mode: InputMode::Normal,
            cursor_position: price_input.len(),
            price_input,
            picker,
            feedback: FeedbackHooks::new(config.audible_tick() && !quiet),
            quick_values: config.quick_values(),
            result: None,
            toast: None,
            interactions: InteractionRegistry::new(),
            wheel_area: ClickRegion::default(),
            drag_anchor: None,
        };
        app.recompute();
        app
    }

    // === Frame tick ===

    /// One display frame: settle any pending wheel evaluation and expire the
    /// toast. This is the only place a scroll gesture becomes a value.
    pub fn on_frame(&mut self) {
        if let Some(pct) = self.picker.on_frame(&mut self.feedback) {
            log::log_event(&format!("discount changed to {}%", pct));
            self.recompute();
        }
        if self.toast.as_ref().is_some_and(|t| t.expired()) {
            self.toast = None;
        }
    }

    // === Amounts ===

    /// The typed amount, if it parses at all (may be negative).
    pub fn parsed_amount(&self) -> Option<f64> {
        money::parse_amount(&self.price_input)
    }

    /// The typed amount when it is usable for a discount computation.
    pub fn valid_amount(&self) -> Option<f64> {
        self.parsed_amount().filter(|n| *n >= 0.0)
    }

    /// Recompute the discount result from the current input and percentage.
    pub fn recompute(&mut self) {
        self.result = self
            .valid_amount()
            .map(|amount| money::discount_cents(money::to_cents(amount), self.pct() as f64));
    }

    pub fn pct(&self) -> i32 {
        self.picker.value()
    }

    pub fn final_text(&self) -> String {
        self.result
            .map(|r| money::format_eur(money::cents_to_major(r.final_cents)))
            .unwrap_or_else(|| EMPTY_AMOUNT.to_string())
    }

    pub fn saved_text(&self) -> String {
        self.result
            .map(|r| money::format_eur(money::cents_to_major(r.saved_cents)))
            .unwrap_or_else(|| EMPTY_AMOUNT.to_string())
    }

    /// Show the format hint when there is input but it doesn't parse.
    pub fn show_format_hint(&self) -> bool {
        !self.price_input.trim().is_empty() && self.parsed_amount().is_none()
    }

    // === Wheel ===

    /// Raw scroll input, in the wheel's extent units.
    pub fn wheel_scroll(&mut self, delta: f64) {
        self.picker.scroll_by(delta);
    }

    /// Continuous drag: half an item extent per terminal row, relative to
    /// the previous drag position.
    pub fn wheel_drag_to(&mut self, row: u16) {
        if let Some(anchor) = self.drag_anchor {
            let delta = (anchor as f64 - row as f64) * self.picker.item_extent() * 0.5;
            if delta != 0.0 {
                self.picker.scroll_by(delta);
            }
        }
        self.drag_anchor = Some(row);
    }

    pub fn end_wheel_drag(&mut self) {
        self.drag_anchor = None;
    }

    /// Quick-select path: assigns the percentage directly, bypassing the
    /// scroll machinery, and recomputes immediately.
    pub fn quick_select(&mut self, pct: i32) {
        self.picker.set_value(pct);
        self.recompute();
    }

    // === Copy flow ===

    /// Copy the final price. Does nothing while no result is available
    /// (the button renders disabled in that state).
    pub fn copy_final_price(&mut self) {
        let Some(result) = self.result else {
            return;
        };
        let text = money::format_eur(money::cents_to_major(result.final_cents));
        match try_copy(&text) {
            Ok(()) => self.show_toast("Precio copiado"),
            Err(err) => {
                log::log(&format!("Copy failed: {}", err));
                self.show_toast("No se pudo copiar");
            }
        }
    }

    /// Show a toast, replacing any current one and restarting its timer.
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    // === Mode switching ===

    pub fn enter_insert_mode(&mut self) {
        self.input_mode = InputMode::Insert;
    }

    pub fn exit_insert_mode(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn open_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    pub fn close_help(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    // === Price field editing ===

    /// Add a character to the price field at the cursor
    pub fn input_char(&mut self, c: char) {
        self.price_input.insert(self.cursor_position, c);
        self.cursor_position += c.len_utf8();
        self.recompute();
    }

    /// Delete character before cursor
    pub fn input_backspace(&mut self) {
        if self.cursor_position > 0 {
            let mut prev = self.cursor_position - 1;
            while !self.price_input.is_char_boundary(prev) {
                prev -= 1;
            }
            self.price_input.remove(prev);
            self.cursor_position = prev;
            self.recompute();
        }
    }

    /// Delete character at cursor
    pub fn input_delete(&mut self) {
        if self.cursor_position < self.price_input.len() {
            self.price_input.remove(self.cursor_position);
            self.recompute();
        }
    }

    /// Move cursor left
    pub fn input_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            while !self.price_input.is_char_boundary(self.cursor_position) {
                self.cursor_position -= 1;
            }
        }
    }

    /// Move cursor right
    pub fn input_right(&mut self) {
        if self.cursor_position < self.price_input.len() {
            self.cursor_position += 1;
            while self.cursor_position < self.price_input.len()
                && !self.price_input.is_char_boundary(self.cursor_position)
            {
                self.cursor_position += 1;
            }
        }
    }

    /// Move cursor to start of input
    pub fn input_home(&mut self) {
        self.cursor_position = 0;
    }

    /// Move cursor to end of input
    pub fn input_end(&mut self) {
        self.cursor_position = self.price_input.len();
    }

    /// Clear the price field (Ctrl+C in insert mode)
    pub fn clear_input(&mut self) {
        self.price_input.clear();
        self.cursor_position = 0;
        self.recompute();
    }
}

fn try_copy(text: &str) -> error::Result<()> {
    clipboard::copy_text(text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(&Config::default(), None, true)
    }

    #[test]
    fn test_no_result_without_input() {
        let app = app();
        assert!(app.result.is_none());
        assert_eq!(app.final_text(), EMPTY_AMOUNT);
        assert_eq!(app.saved_text(), EMPTY_AMOUNT);
        assert!(!app.show_format_hint());
    }

    #[test]
    fn test_typing_price_recomputes() {
        let mut app = app();
        for c in "100".chars() {
            app.input_char(c);
        }
        let result = app.result.expect("result after valid input");
        assert_eq!(result.pct, 30);
        assert_eq!(result.final_cents, 7_000);
        assert_eq!(app.final_text(), "70,00 €");
        assert_eq!(app.saved_text(), "30,00 €");
    }

    #[test]
    fn test_unparseable_input_shows_hint() {
        let mut app = app();
        for c in "abc".chars() {
            app.input_char(c);
        }
        assert!(app.result.is_none());
        assert!(app.show_format_hint());
    }

    #[test]
    fn test_negative_amount_suppresses_result_without_hint() {
        let mut app = app();
        for c in "-5".chars() {
            app.input_char(c);
        }
        assert!(app.result.is_none());
        assert!(!app.show_format_hint());
    }

    #[test]
    fn test_quick_select_updates_result() {
        let mut app = app();
        for c in "100".chars() {
            app.input_char(c);
        }
        app.quick_select(50);
        assert_eq!(app.pct(), 50);
        assert_eq!(app.result.unwrap().final_cents, 5_000);
    }

    #[test]
    fn test_wheel_settle_recomputes() {
        let mut app = app();
        for c in "200".chars() {
            app.input_char(c);
        }
        // One item forward, settled on the next frame
        let extent = app.picker.item_extent();
        app.wheel_scroll(extent);
        app.on_frame();
        assert_eq!(app.pct(), 31);
        assert_eq!(app.result.unwrap().final_cents, 13_800);
    }

    #[test]
    fn test_editing_cursor_moves() {
        let mut app = app();
        for c in "12,5".chars() {
            app.input_char(c);
        }
        app.input_left();
        app.input_left();
        app.input_char('3');
        assert_eq!(app.price_input, "123,5");
        app.input_backspace();
        assert_eq!(app.price_input, "12,5");
        app.clear_input();
        assert_eq!(app.price_input, "");
        assert!(app.result.is_none());
    }

    #[test]
    fn test_toast_replaced_not_stacked() {
        let mut app = app();
        app.show_toast("uno");
        app.show_toast("dos");
        assert_eq!(app.toast.as_ref().unwrap().message, "dos");
    }
}
