//! UI components for the TUI.
//!
//! This module organizes UI rendering into logical components.
//!
//! # Component Organization
//!
//! - `price_input` - Original price text field with format hint
//! - `wheel` - Infinite-scroll percentage wheel
//! - `quick_select` - Quick-select percentage button row
//! - `result_panel` - Final price, savings, and copy button
//! - `toast` - Transient bottom notification
//! - `help_popup` - Help overlay with keybindings

mod help_popup;
mod price_input;
mod quick_select;
mod result_panel;
mod toast;
mod wheel;

// Re-export all render functions for use in ui.rs
pub use help_popup::render_help_popup;
pub use price_input::render_price_input;
pub use quick_select::render_quick_select;
pub use result_panel::render_result_panel;
pub use toast::render_toast;
pub use wheel::render_wheel;
