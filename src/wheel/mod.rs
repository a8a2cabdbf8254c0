//! Quantized infinite-scroll wheel picker.
//!
//! The wheel turns continuous scroll/drag input into a discrete value from a
//! bounded, stepped range while looking like an endlessly looping dial. The
//! pieces, leaf to root: [`range::ValueRange`] defines the admissible
//! values, [`buffer::LoopBuffer`] triplicates them, [`mapper::PositionMapper`]
//! converts offsets to values (and splices drifted offsets back into the
//! middle replica), [`dispatch::ChangeDispatcher`] coalesces input bursts to
//! one evaluation per frame, and [`feedback::FeedbackHooks`] fires the
//! best-effort tick on every dispatched change.

pub mod buffer;
pub mod dispatch;
pub mod feedback;
pub mod mapper;
pub mod range;

pub use feedback::FeedbackHooks;
pub use range::ValueRange;

use buffer::LoopBuffer;
use dispatch::ChangeDispatcher;
use mapper::PositionMapper;

/// Default visual size of one wheel item, in abstract scroll units.
pub const DEFAULT_ITEM_EXTENT: f64 = 44.0;

/// Construction parameters for a wheel.
#[derive(Debug, Clone, Copy)]
pub struct WheelParams {
    pub min: i32,
    pub max: i32,
    pub step: i32,
    pub initial: i32,
    pub item_extent: f64,
}

impl Default for WheelParams {
    fn default() -> Self {
        Self {
            min: 0,
            max: 90,
            step: 1,
            initial: 30,
            item_extent: DEFAULT_ITEM_EXTENT,
        }
    }
}

/// One picker instance. Owns its scroll position exclusively; all mutation
/// happens through the scroll/frame/set-value paths below.
#[derive(Debug)]
pub struct WheelPicker {
    range: ValueRange,
    buffer: LoopBuffer,
    mapper: PositionMapper,
    dispatcher: ChangeDispatcher,
    offset: f64,
}

impl WheelPicker {
    pub fn new(params: WheelParams) -> Self {
        let range = ValueRange::new(params.min, params.max, params.step);
        let initial = range.clamp_to_member(params.initial);
        let buffer = LoopBuffer::new(&range);
        let mapper = PositionMapper::new(params.item_extent);
        let offset = mapper.offset_of(&buffer, range.position_of(initial).unwrap_or(0));
        Self {
            range,
            buffer,
            mapper,
            dispatcher: ChangeDispatcher::new(initial),
            offset,
        }
    }

    /// The value last dispatched (or assigned). Always a range member.
    pub fn value(&self) -> i32 {
        self.dispatcher.last_dispatched()
    }

    /// Current offset for the host to position its scrollable surface.
    #[allow(dead_code)]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn range(&self) -> &ValueRange {
        &self.range
    }

    pub fn item_extent(&self) -> f64 {
        self.mapper.item_extent()
    }

    /// Feed raw scroll/drag input. Positive deltas move toward larger
    /// values. Queues (or supersedes) the single pending evaluation; the
    /// value itself only updates at the next frame.
    pub fn scroll_by(&mut self, delta: f64) {
        self.offset = (self.offset + delta).clamp(0.0, self.mapper.max_offset(&self.buffer));
        self.dispatcher.schedule();
    }

    /// Frame boundary: recenter, resolve, and dispatch at most one change.
    /// Fires the feedback hooks only when a change is emitted.
    pub fn on_frame(&mut self, hooks: &mut FeedbackHooks) -> Option<i32> {
        if !self.dispatcher.is_scheduled() {
            return None;
        }
        self.offset = self.mapper.recenter(&self.buffer, self.offset);
        let resolved = self.mapper.value_at_offset(&self.buffer, self.offset);
        let changed = self.dispatcher.settle(resolved);
        if changed.is_some() {
            hooks.tick();
        }
        changed
    }

    /// Programmatic assignment (quick-select buttons). Non-members clamp to
    /// the nearest member. The dispatcher is synced immediately; the visual
    /// position only jumps when it is more than one item extent away, so an
    /// in-flight gesture near the target is not yanked back.
    pub fn set_value(&mut self, value: i32) {
        let value = self.range.clamp_to_member(value);
        self.dispatcher.sync(value);
        let target = self
            .mapper
            .offset_of(&self.buffer, self.range.position_of(value).unwrap_or(0));
        if (self.offset - target).abs() > self.mapper.item_extent() {
            self.offset = target;
        }
    }

    /// Values rendered around the current position: `radius` rows on each
    /// side of the centered item, wrapping modularly so the dial face never
    /// shows a gap.
    pub fn window(&self, radius: usize) -> Vec<i32> {
        let len = self.buffer.len() as i64;
        let center = self.mapper.index_at(&self.buffer, self.offset) as i64;
        (center - radius as i64..=center + radius as i64)
            .map(|i| self.buffer.value_at(i.rem_euclid(len) as usize))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wheel() -> WheelPicker {
        WheelPicker::new(WheelParams {
            min: 0,
            max: 90,
            step: 10,
            initial: 30,
            item_extent: 44.0,
        })
    }

    fn settle(picker: &mut WheelPicker) -> Option<i32> {
        let mut hooks = FeedbackHooks::new(false);
        picker.on_frame(&mut hooks)
    }

    #[test]
    fn test_initial_value_centered() {
        let picker = wheel();
        assert_eq!(picker.value(), 30);
        // Middle replica: index 10 + position 3
        assert_eq!(picker.offset(), 13.0 * 44.0);
    }

    #[test]
    fn test_coalesced_burst_dispatches_once() {
        let mut picker = wheel();
        // Four items forward as many small deltas, all within one frame
        for _ in 0..16 {
            picker.scroll_by(11.0);
        }
        assert_eq!(settle(&mut picker), Some(70));
        // Nothing left pending
        assert_eq!(settle(&mut picker), None);
    }

    #[test]
    fn test_per_frame_steps_dispatch_in_order() {
        let mut picker = wheel();
        let mut emitted = vec![];
        for _ in 0..4 {
            picker.scroll_by(44.0);
            if let Some(v) = settle(&mut picker) {
                emitted.push(v);
            }
        }
        assert_eq!(emitted, vec![40, 50, 60, 70]);
    }

    #[test]
    fn test_sub_item_scroll_does_not_dispatch() {
        let mut picker = wheel();
        picker.scroll_by(10.0);
        assert_eq!(settle(&mut picker), None);
        assert_eq!(picker.value(), 30);
    }

    #[test]
    fn test_wraps_past_range_start() {
        let mut picker = wheel();
        // Scroll far backwards, one item per frame; the dial keeps turning
        let mut last = 30;
        for _ in 0..8 {
            picker.scroll_by(-44.0);
            if let Some(v) = settle(&mut picker) {
                last = v;
            }
        }
        // 30 → 20 → 10 → 0 → 90 → 80 → 70 → 60 → 50
        assert_eq!(last, 50);
        // Offset stays inside the middle replica
        let index = (picker.offset() / 44.0).round() as usize;
        assert!((10..20).contains(&index));
    }

    #[test]
    fn test_set_value_far_jumps() {
        let mut picker = wheel();
        picker.set_value(80);
        assert_eq!(picker.value(), 80);
        assert_eq!(picker.offset(), 18.0 * 44.0);
        // No change notification for the assignment itself
        picker.scroll_by(0.0);
        assert_eq!(settle(&mut picker), None);
    }

    #[test]
    fn test_set_value_near_keeps_offset() {
        let mut picker = wheel();
        // Drift slightly off center, then assign the value already in view
        picker.scroll_by(20.0);
        let offset = picker.offset();
        picker.set_value(30);
        assert_eq!(picker.offset(), offset);
        assert_eq!(picker.value(), 30);
    }

    #[test]
    fn test_set_value_clamps_to_member() {
        let mut picker = wheel();
        picker.set_value(1234);
        assert_eq!(picker.value(), 90);
        picker.set_value(-5);
        assert_eq!(picker.value(), 0);
        picker.set_value(34);
        assert_eq!(picker.value(), 30);
    }

    #[test]
    fn test_window_is_contiguous_dial_face() {
        let picker = wheel();
        assert_eq!(picker.window(2), vec![10, 20, 30, 40, 50]);
    }

    #[test]
    fn test_window_wraps_at_dial_seam() {
        let mut picker = WheelPicker::new(WheelParams {
            min: 0,
            max: 20,
            step: 10,
            initial: 0,
            item_extent: 44.0,
        });
        picker.set_value(0);
        assert_eq!(picker.window(1), vec![20, 0, 10]);
    }
}
