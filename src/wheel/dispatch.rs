//! Frame-coalesced change dispatch.
//!
//! Raw scroll input arrives far more often than the display refreshes. The
//! dispatcher holds a single pending-evaluation slot: every raw input marks
//! it `Scheduled` (superseding whatever was pending, since only the latest
//! position matters), and the next frame boundary drains it. A settle emits
//! at most one notification, and only when the resolved value differs from
//! the last one dispatched.

/// Single-slot evaluation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DispatchState {
    /// Nothing queued for the next frame.
    Idle,
    /// Exactly one evaluation queued; new input reuses the slot.
    Scheduled,
}

/// Deduplicating change notifier for the wheel.
#[derive(Debug, Clone)]
pub struct ChangeDispatcher {
    state: DispatchState,
    last_dispatched: i32,
}

impl ChangeDispatcher {
    /// `initial` seeds the last-dispatched value so the first settle on an
    /// unchanged position emits nothing.
    pub fn new(initial: i32) -> Self {
        Self {
            state: DispatchState::Idle,
            last_dispatched: initial,
        }
    }

    /// Queue an evaluation for the next frame. Called on every raw
    /// scroll/drag input; while already scheduled this replaces the pending
    /// evaluation rather than adding one.
    pub fn schedule(&mut self) {
        self.state = DispatchState::Scheduled;
    }

    pub fn is_scheduled(&self) -> bool {
        self.state == DispatchState::Scheduled
    }

    /// Drain the pending evaluation with the value the position resolved to.
    ///
    /// Returns `Some(resolved)` exactly once per distinct settled value;
    /// `None` when nothing was scheduled or the value did not change.
    pub fn settle(&mut self, resolved: i32) -> Option<i32> {
        if self.state != DispatchState::Scheduled {
            return None;
        }
        self.state = DispatchState::Idle;
        if resolved == self.last_dispatched {
            return None;
        }
        self.last_dispatched = resolved;
        Some(resolved)
    }

    /// Record an externally assigned value without emitting a notification.
    /// Used by the programmatic set-value path, which reports through its
    /// own channel.
    pub fn sync(&mut self, value: i32) {
        self.last_dispatched = value;
    }

    pub fn last_dispatched(&self) -> i32 {
        self.last_dispatched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settle_without_schedule_is_noop() {
        let mut dispatcher = ChangeDispatcher::new(30);
        assert_eq!(dispatcher.settle(40), None);
        assert_eq!(dispatcher.last_dispatched(), 30);
    }

    #[test]
    fn test_emits_once_per_change() {
        let mut dispatcher = ChangeDispatcher::new(30);
        dispatcher.schedule();
        assert_eq!(dispatcher.settle(40), Some(40));
        // Slot drained; a second frame without input emits nothing
        assert_eq!(dispatcher.settle(40), None);
    }

    #[test]
    fn test_unchanged_value_not_redispatched() {
        let mut dispatcher = ChangeDispatcher::new(30);
        dispatcher.schedule();
        assert_eq!(dispatcher.settle(30), None);
        assert!(!dispatcher.is_scheduled());
    }

    #[test]
    fn test_burst_coalesces_to_single_emit() {
        let mut dispatcher = ChangeDispatcher::new(30);
        for _ in 0..50 {
            dispatcher.schedule();
        }
        assert_eq!(dispatcher.settle(70), Some(70));
        assert_eq!(dispatcher.settle(70), None);
    }

    #[test]
    fn test_separate_frames_emit_in_order() {
        let mut dispatcher = ChangeDispatcher::new(30);
        let mut emitted = vec![];
        for value in [40, 50, 50, 60] {
            dispatcher.schedule();
            if let Some(v) = dispatcher.settle(value) {
                emitted.push(v);
            }
        }
        assert_eq!(emitted, vec![40, 50, 60]);
    }

    #[test]
    fn test_sync_suppresses_echo() {
        let mut dispatcher = ChangeDispatcher::new(30);
        dispatcher.sync(70);
        dispatcher.schedule();
        // The position now resolves to the synced value; no duplicate emit
        assert_eq!(dispatcher.settle(70), None);
    }
}
