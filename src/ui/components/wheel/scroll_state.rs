// src/ui/components/wheel/scroll_state.rs
//! Selection and scroll-offset bookkeeping for the wheel
//!
//! The wheel's position is `selected * item_height + offset`. Every delta is
//! folded into `offset` and whole items are then moved out of it into
//! `selected`, so `offset` stays a small residual between the selected item's
//! resting position and what is currently on screen.

use log::trace;

/// Smallest offset worth animating; anything at or under it snaps instantly
pub const MIN_DELTA_FOR_SCROLLING: i32 = 1;

/// What the caller has to do after [`ScrollState::justify`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Justify {
    /// No items, nothing happened
    Empty,
    /// Animate a transition from 0 to `distance` and finish when it lands
    Settle { distance: i32 },
    /// Already on an item boundary; scrolling has been finished
    Settled,
}

/// Scroll state of a wheel
#[derive(Debug, Clone)]
pub struct ScrollState {
    selected: usize,
    offset: i32,
    item_count: usize,
    item_height: i32,
    widget_height: i32,
    cyclic: bool,
    scrolling: bool,
    dirty: bool,
}

impl ScrollState {
    pub fn new(item_height: i32) -> Self {
        debug_assert!(item_height > 0, "item height must be positive");

        Self {
            selected: 0,
            offset: 0,
            item_count: 0,
            item_height,
            widget_height: 0,
            cyclic: false,
            scrolling: false,
            dirty: true,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn offset(&self) -> i32 {
        self.offset
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn item_height(&self) -> i32 {
        self.item_height
    }

    pub fn is_cyclic(&self) -> bool {
        self.cyclic
    }

    pub fn set_cyclic(&mut self, cyclic: bool) {
        self.cyclic = cyclic;
    }

    pub fn is_scrolling(&self) -> bool {
        self.scrolling
    }

    /// Height of the widget, used to cap runaway offsets
    pub fn set_widget_height(&mut self, height: u32) {
        self.widget_height = height.min(i32::MAX as u32) as i32;
    }

    /// Absolute pixel position of what is on screen
    pub fn position(&self) -> i32 {
        (self.selected as i64 * self.item_height as i64 + self.offset as i64)
            .clamp(i32::MIN as i64, i32::MAX as i64) as i32
    }

    /// Replace the item count, pulling the selection back into range
    pub fn set_item_count(&mut self, count: usize) {
        self.item_count = count;
        self.set_selected(self.selected);
    }

    /// Select an item directly, clamping into `[0, item_count - 1]`
    pub fn set_selected(&mut self, index: usize) {
        self.selected = match self.item_count {
            0 => 0,
            count => index.min(count - 1),
        };
        self.dirty = true;
    }

    /// Map any signed index into range: wrap when cyclic, clamp otherwise
    pub fn clamp_or_wrap(&self, index: i64) -> usize {
        let count = self.item_count as i64;
        if count == 0 {
            return 0;
        }

        if self.cyclic {
            index.rem_euclid(count) as usize
        } else {
            index.clamp(0, count - 1) as usize
        }
    }

    pub fn start_scrolling(&mut self) {
        if !self.scrolling {
            trace!("wheel: scrolling started at item {}", self.selected);
            self.scrolling = true;
        }
    }

    /// Leave the scrolling state and drop any residual offset
    pub fn finish(&mut self) {
        self.scrolling = false;
        if self.offset != 0 {
            self.offset = 0;
            self.dirty = true;
        }
    }

    /// Move the wheel by `delta` pixels
    ///
    /// Positive deltas move towards higher indexes.
    pub fn apply_delta(&mut self, delta: i32) {
        if self.item_count == 0 {
            return;
        }

        self.offset = self.offset.saturating_add(delta);

        let count = self.item_count as i64;
        let selected = self.selected as i64;
        let mut steps = (self.offset / self.item_height) as i64;
        let mut pos = selected + steps;

        if self.cyclic {
            pos = pos.rem_euclid(count);
        } else if self.scrolling {
            // Overscroll past either end is absorbed into the offset
            if pos < 0 {
                steps = selected;
                pos = 0;
            } else if pos >= count {
                steps = selected - count + 1;
                pos = count - 1;
            }
        } else {
            pos = pos.clamp(0, count - 1);
        }

        if pos as usize != self.selected {
            self.set_selected(pos as usize);
        } else {
            self.dirty = true;
        }

        let residual = self.offset as i64 - steps * self.item_height as i64;
        let mut residual = residual.clamp(i32::MIN as i64, i32::MAX as i64) as i32;
        if self.widget_height > 0 && residual.unsigned_abs() > self.widget_height as u32 {
            residual %= self.widget_height;
        }
        self.offset = residual;
    }

    /// Decide how to land on an item boundary
    ///
    /// An offset that has travelled more than four fifths of an item towards a
    /// neighbour that exists (always, when cyclic) is pushed one more item in
    /// the same direction. Offsets still larger than
    /// [`MIN_DELTA_FOR_SCROLLING`] need an animated settle; otherwise the state
    /// is finished on the spot.
    pub fn justify(&mut self) -> Justify {
        if self.item_count == 0 {
            return Justify::Empty;
        }

        let h = self.item_height;
        let mut offset = self.offset;

        let need_to_advance = if offset > 0 {
            self.selected < self.item_count - 1
        } else {
            self.selected > 0
        };

        if (self.cyclic || need_to_advance) && offset.unsigned_abs() as i64 * 5 > h as i64 * 4 {
            if offset < 0 {
                offset = offset.saturating_sub(h + MIN_DELTA_FOR_SCROLLING);
            } else {
                offset = offset.saturating_add(h + MIN_DELTA_FOR_SCROLLING);
            }
        }

        if offset.unsigned_abs() > MIN_DELTA_FOR_SCROLLING as u32 {
            Justify::Settle { distance: -offset }
        } else {
            self.finish();
            Justify::Settled
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const H: i32 = 15;

    fn state(count: usize, selected: usize, cyclic: bool) -> ScrollState {
        let mut state = ScrollState::new(H);
        state.set_item_count(count);
        state.set_selected(selected);
        state.set_cyclic(cyclic);
        state.set_widget_height(240);
        state
    }

    #[test]
    fn test_small_delta_stays_in_offset() {
        let mut s = state(5, 2, false);
        s.start_scrolling();
        s.apply_delta(H - 1);

        assert_eq!(s.selected(), 2);
        assert_eq!(s.offset(), H - 1);
    }

    #[test]
    fn test_whole_items_move_selection() {
        let mut s = state(10, 2, false);
        s.start_scrolling();
        s.apply_delta(3 * H + 4);

        assert_eq!(s.selected(), 5);
        assert_eq!(s.offset(), 4);

        s.apply_delta(-(2 * H + 4));
        assert_eq!(s.selected(), 3);
        assert_eq!(s.offset(), 0);
    }

    #[test]
    fn test_round_trip_small_delta() {
        for d in [-(H - 1), -7, -1, 0, 1, 7, H - 1] {
            let mut s = state(5, 2, false);
            s.start_scrolling();
            s.apply_delta(d);
            s.apply_delta(-d);

            assert_eq!(s.selected(), 2, "delta {}", d);
            assert_eq!(s.offset(), 0, "delta {}", d);
        }
    }

    #[test]
    fn test_non_cyclic_clamps_at_end_when_idle() {
        let mut s = state(5, 4, false);
        s.apply_delta(H * 2);

        assert_eq!(s.selected(), 4);
        assert_eq!(s.offset(), 0);
    }

    #[test]
    fn test_non_cyclic_absorbs_overscroll_while_scrolling() {
        let mut s = state(5, 4, false);
        s.start_scrolling();
        s.apply_delta(H * 2);

        assert_eq!(s.selected(), 4);
        // Step count collapses to zero at the last item, the pixels stay
        assert_eq!(s.offset(), H * 2);
    }

    #[test]
    fn test_non_cyclic_absorbs_overscroll_at_start() {
        let mut s = state(5, 0, false);
        s.start_scrolling();
        s.apply_delta(-3 * H);

        assert_eq!(s.selected(), 0);
        assert_eq!(s.offset(), -3 * H);
    }

    #[test]
    fn test_non_cyclic_index_always_in_range() {
        let deltas = [37, -120, 400, -15, -999, 14, 1000, -3, 61, -61, 250, -250];
        for scrolling in [false, true] {
            let mut s = state(7, 3, false);
            if scrolling {
                s.start_scrolling();
            }
            for d in deltas {
                s.apply_delta(d);
                assert!(s.selected() < 7);
                assert!(s.offset().abs() <= 240);
            }
        }
    }

    #[test]
    fn test_offset_normalized_by_widget_height() {
        let mut s = state(3, 2, false);
        s.set_widget_height(40);
        s.start_scrolling();
        for _ in 0..20 {
            s.apply_delta(H);
            assert!(s.offset().abs() <= 40);
        }
        assert_eq!(s.selected(), 2);
    }

    #[test]
    fn test_cyclic_wraps_backwards() {
        let mut s = state(3, 0, true);
        s.start_scrolling();
        s.apply_delta(-H);

        assert_eq!(s.selected(), 2);
        assert_eq!(s.offset(), 0);
    }

    #[test]
    fn test_cyclic_wraps_forwards() {
        let mut s = state(3, 2, true);
        s.start_scrolling();
        s.apply_delta(2 * H + 3);

        assert_eq!(s.selected(), 1);
        assert_eq!(s.offset(), 3);
    }

    #[test]
    fn test_cyclic_index_congruent_to_unwrapped_sum() {
        let count = 7i64;
        let start = 3i64;
        let mut s = state(count as usize, start as usize, true);
        s.start_scrolling();

        let mut total = 0i64;
        for d in [37, -120, 400, -15, -999, 14, 1000, -3, 61, -61, 250, -250] {
            s.apply_delta(d);
            total += d as i64;

            let selected = s.selected() as i64;
            assert!(selected < count);
            let unwrapped = start + (total - s.offset() as i64) / H as i64;
            assert_eq!(unwrapped.rem_euclid(count), selected);
        }
    }

    #[test]
    fn test_empty_sequence_ignores_deltas() {
        let mut s = state(0, 0, false);
        s.apply_delta(100);

        assert_eq!(s.selected(), 0);
        assert_eq!(s.offset(), 0);
        assert_eq!(s.justify(), Justify::Empty);
    }

    #[test]
    fn test_justify_settled_is_idempotent() {
        let mut s = state(5, 2, false);
        s.start_scrolling();

        assert_eq!(s.justify(), Justify::Settled);
        assert!(!s.is_scrolling());
        assert_eq!(s.offset(), 0);

        assert_eq!(s.justify(), Justify::Settled);
        assert!(!s.is_scrolling());
        assert_eq!(s.offset(), 0);
    }

    #[test]
    fn test_justify_single_pixel_snaps() {
        let mut s = state(5, 2, false);
        s.start_scrolling();
        s.apply_delta(MIN_DELTA_FOR_SCROLLING);

        assert_eq!(s.justify(), Justify::Settled);
        assert_eq!(s.offset(), 0);
    }

    #[test]
    fn test_justify_small_offset_settles_back() {
        let mut s = state(5, 2, false);
        s.start_scrolling();
        s.apply_delta(5);

        assert_eq!(s.justify(), Justify::Settle { distance: -5 });
        assert!(s.is_scrolling());
    }

    #[test]
    fn test_justify_pushes_almost_complete_item() {
        // 0.9 of an item towards an existing neighbour
        let h = 20;
        let mut s = ScrollState::new(h);
        s.set_item_count(3);
        s.set_selected(1);
        s.set_widget_height(240);
        s.start_scrolling();
        s.apply_delta(18);

        assert_eq!(
            s.justify(),
            Justify::Settle {
                distance: -(18 + h + MIN_DELTA_FOR_SCROLLING)
            }
        );
    }

    #[test]
    fn test_justify_no_push_without_neighbour() {
        let h = 20;
        let mut s = ScrollState::new(h);
        s.set_item_count(3);
        s.set_selected(2);
        s.set_widget_height(240);
        s.start_scrolling();
        s.apply_delta(18);

        // Already on the last item, nothing to advance to
        assert_eq!(s.justify(), Justify::Settle { distance: -18 });
    }

    #[test]
    fn test_justify_cyclic_always_pushes() {
        let h = 20;
        let mut s = ScrollState::new(h);
        s.set_item_count(3);
        s.set_selected(0);
        s.set_cyclic(true);
        s.start_scrolling();
        s.apply_delta(-17);

        assert_eq!(
            s.justify(),
            Justify::Settle {
                distance: 17 + h + MIN_DELTA_FOR_SCROLLING
            }
        );
    }

    #[test]
    fn test_set_item_count_pulls_selection_back() {
        let mut s = state(10, 8, false);
        s.set_item_count(4);
        assert_eq!(s.selected(), 3);

        s.set_item_count(0);
        assert_eq!(s.selected(), 0);
    }

    #[test]
    fn test_set_selected_clamps() {
        let mut s = state(5, 0, false);
        s.mark_clean();
        s.set_selected(42);

        assert_eq!(s.selected(), 4);
        assert!(s.is_dirty());
    }

    #[test]
    fn test_clamp_or_wrap() {
        let s = state(5, 0, false);
        assert_eq!(s.clamp_or_wrap(-3), 0);
        assert_eq!(s.clamp_or_wrap(9), 4);

        let c = state(5, 0, true);
        assert_eq!(c.clamp_or_wrap(-3), 2);
        assert_eq!(c.clamp_or_wrap(9), 4);
        assert_eq!(c.clamp_or_wrap(5), 0);
    }

    #[test]
    fn test_delta_marks_dirty() {
        let mut s = state(5, 2, false);
        s.mark_clean();
        s.apply_delta(1);
        assert!(s.is_dirty());
    }
}
