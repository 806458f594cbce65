// Copyright 2026 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer bookkeeping: last known position per active pointer.
//!
//! The tracker keeps slots in pointer-down arrival order; that order is
//! load-bearing, because the pinch gesture is driven by the *first two*
//! pointers and any later ones are tracked for identity only.

use kurbo::Point;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Slot {
    id: u64,
    pos: Point,
}

/// Last known position of each active pointer, ordered by arrival.
///
/// Slots are created by [`PointerTracker::insert`] on pointer-down and
/// destroyed by [`PointerTracker::remove`] on pointer-up; moves referencing
/// an identifier with no slot are reported as unknown so callers can drop
/// them defensively.
#[derive(Clone, Debug, Default)]
pub struct PointerTracker {
    // Two slots cover pan and pinch; extra fingers spill rarely.
    slots: SmallVec<[Slot; 4]>,
}

impl PointerTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a pointer-down, replacing the slot if the id is already known.
    pub fn insert(&mut self, id: u64, pos: Point) {
        if let Some(slot) = self.slots.iter_mut().find(|s| s.id == id) {
            slot.pos = pos;
        } else {
            self.slots.push(Slot { id, pos });
        }
    }

    /// Records a pointer-move, returning the previous position.
    ///
    /// Returns `None` for an identifier never seen in a down event; callers
    /// ignore such moves.
    pub fn update(&mut self, id: u64, pos: Point) -> Option<Point> {
        let slot = self.slots.iter_mut().find(|s| s.id == id)?;
        let previous = slot.pos;
        slot.pos = pos;
        Some(previous)
    }

    /// Removes a pointer's slot, returning `true` if it existed.
    pub fn remove(&mut self, id: u64) -> bool {
        match self.slots.iter().position(|s| s.id == id) {
            Some(index) => {
                self.slots.remove(index);
                true
            }
            None => false,
        }
    }

    /// Returns the last known position for `id`.
    #[must_use]
    pub fn position(&self, id: u64) -> Option<Point> {
        self.slots.iter().find(|s| s.id == id).map(|s| s.pos)
    }

    /// Number of active pointers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` when no pointers are active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The earliest-arrived active pointer, if any.
    #[must_use]
    pub fn primary(&self) -> Option<(u64, Point)> {
        self.slots.first().map(|s| (s.id, s.pos))
    }

    /// The two earliest-arrived active pointers, if at least two are active.
    #[must_use]
    pub fn pair(&self) -> Option<((u64, Point), (u64, Point))> {
        match self.slots.as_slice() {
            [a, b, ..] => Some(((a.id, a.pos), (b.id, b.pos))),
            _ => None,
        }
    }

    /// Drops every slot.
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::PointerTracker;

    #[test]
    fn insert_and_position() {
        let mut tracker = PointerTracker::new();
        assert!(tracker.is_empty());

        tracker.insert(7, Point::new(1.0, 2.0));
        assert_eq!(tracker.len(), 1);
        assert_eq!(tracker.position(7), Some(Point::new(1.0, 2.0)));
        assert_eq!(tracker.position(8), None);
    }

    #[test]
    fn update_returns_previous_position() {
        let mut tracker = PointerTracker::new();
        tracker.insert(1, Point::new(10.0, 10.0));

        let previous = tracker.update(1, Point::new(15.0, 12.0));
        assert_eq!(previous, Some(Point::new(10.0, 10.0)));
        assert_eq!(tracker.position(1), Some(Point::new(15.0, 12.0)));
    }

    #[test]
    fn update_unknown_id_is_rejected() {
        let mut tracker = PointerTracker::new();
        assert_eq!(tracker.update(42, Point::new(0.0, 0.0)), None);
        assert!(tracker.is_empty());
    }

    #[test]
    fn duplicate_down_replaces_position() {
        let mut tracker = PointerTracker::new();
        tracker.insert(1, Point::new(0.0, 0.0));
        tracker.insert(1, Point::new(5.0, 5.0));

        assert_eq!(tracker.len(), 1);
        assert_eq!(tracker.position(1), Some(Point::new(5.0, 5.0)));
    }

    #[test]
    fn pair_preserves_arrival_order() {
        let mut tracker = PointerTracker::new();
        tracker.insert(9, Point::new(0.0, 0.0));
        tracker.insert(3, Point::new(10.0, 0.0));
        tracker.insert(5, Point::new(20.0, 0.0));

        let ((first, _), (second, _)) = tracker.pair().unwrap();
        assert_eq!(first, 9);
        assert_eq!(second, 3);
        assert_eq!(tracker.primary().unwrap().0, 9);
    }

    #[test]
    fn removing_a_pair_member_promotes_the_next_pointer() {
        let mut tracker = PointerTracker::new();
        tracker.insert(1, Point::new(0.0, 0.0));
        tracker.insert(2, Point::new(10.0, 0.0));
        tracker.insert(3, Point::new(20.0, 0.0));

        assert!(tracker.remove(1));
        let ((first, _), (second, _)) = tracker.pair().unwrap();
        assert_eq!((first, second), (2, 3));
    }

    #[test]
    fn remove_unknown_id_reports_false() {
        let mut tracker = PointerTracker::new();
        tracker.insert(1, Point::new(0.0, 0.0));
        assert!(!tracker.remove(2));
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn clear_drops_everything() {
        let mut tracker = PointerTracker::new();
        tracker.insert(1, Point::new(0.0, 0.0));
        tracker.insert(2, Point::new(1.0, 1.0));

        tracker.clear();
        assert!(tracker.is_empty());
        assert_eq!(tracker.pair(), None);
    }
}
