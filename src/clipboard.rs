//! Clipboard handling for copying the final price.
//!
//! The primary path goes through the system clipboard. When that is
//! unavailable (headless session, no display server, SSH), the legacy
//! fallback emits an OSC 52 escape so the terminal emulator itself performs
//! the copy.

use std::io::Write;

use arboard::Clipboard;
use base64::Engine;

use crate::error::ClipboardError;
use crate::log;

/// Copy `text`, preferring the system clipboard and falling back to OSC 52.
pub fn copy_text(text: &str) -> Result<(), ClipboardError> {
    match system_copy(text) {
        Ok(()) => Ok(()),
        Err(err) => {
            log::log(&format!("System clipboard failed, trying OSC 52: {}", err));
            osc52_copy(text)
        }
    }
}

fn system_copy(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard =
        Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| ClipboardError::CopyFailed(e.to_string()))
}

/// Ask the terminal emulator to copy via the OSC 52 escape sequence.
/// Support varies by terminal; a write that succeeds here may still be
/// ignored by an emulator without OSC 52 enabled.
fn osc52_copy(text: &str) -> Result<(), ClipboardError> {
    let payload = base64::engine::general_purpose::STANDARD.encode(text.as_bytes());
    let sequence = format!("\x1b]52;c;{}\x07", payload);

    let mut out = std::io::stdout();
    out.write_all(sequence.as_bytes())
        .and_then(|_| out.flush())
        .map_err(|e| ClipboardError::CopyFailed(e.to_string()))
}
