//! Best-effort selection feedback.
//!
//! Every dispatched value change produces a short audible "tick" (the
//! terminal bell) and arms a brief visual pulse that the renderer reads to
//! flash the selection band. Both are fire-and-forget: a terminal without a
//! bell, a redirected stdout, or a failed write must never surface an error
//! to the dispatch path.

use std::io::Write;
use std::time::{Duration, Instant};

/// How long the visual pulse stays lit after a tick.
const PULSE_WINDOW: Duration = Duration::from_millis(120);

#[derive(Debug)]
pub struct FeedbackHooks {
    audible: bool,
    last_tick: Option<Instant>,
}

impl FeedbackHooks {
    pub fn new(audible: bool) -> Self {
        Self {
            audible,
            last_tick: None,
        }
    }

    /// Fire both feedback channels. Failures are swallowed here; callers
    /// never observe them.
    pub fn tick(&mut self) {
        if self.audible {
            let mut out = std::io::stdout();
            let _ = out.write_all(b"\x07");
            let _ = out.flush();
        }
        self.last_tick = Some(Instant::now());
    }

    /// Whether the selection band should currently render its flash.
    pub fn pulse_active(&self) -> bool {
        self.last_tick
            .map(|at| at.elapsed() < PULSE_WINDOW)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_tick_arms_pulse() {
        let mut hooks = FeedbackHooks::new(false);
        assert!(!hooks.pulse_active());
        hooks.tick();
        assert!(hooks.pulse_active());
    }

    #[test]
    fn test_pulse_expires() {
        let mut hooks = FeedbackHooks::new(false);
        hooks.tick();
        std::thread::sleep(PULSE_WINDOW + Duration::from_millis(20));
        assert!(!hooks.pulse_active());
    }
}
