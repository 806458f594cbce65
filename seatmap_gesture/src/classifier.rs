// Copyright 2026 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture classification: pan vs. pinch vs. tap.
//!
//! The classifier consumes raw `(time, pointer id, position)` triples and
//! returns [`GestureEvent`] transitions. One pointer is a pan candidate until
//! its accumulated movement crosses the tap threshold; a second pointer
//! promotes the sequence to a pinch; a quick press-release with little
//! movement classifies as a tap. After any gesture ends, a short cooldown
//! window suppresses the spurious tap a lifting finger tends to produce.
//!
//! The classifier owns no camera: pan deltas and pinch ratios are reported to
//! the caller, which applies them (or not — e.g. pans are dropped while the
//! view is fully zoomed out).
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use seatmap_gesture::classifier::{GestureClassifier, GestureEvent, GestureThresholds};
//!
//! let mut gestures = GestureClassifier::new(GestureThresholds::default());
//!
//! gestures.pointer_down(0, 1, Point::new(0.0, 0.0));
//! // A 15px move crosses the 10px tap threshold: the sequence is a drag.
//! let ev = gestures.pointer_move(16, 1, Point::new(15.0, 0.0));
//! assert_eq!(ev, Some(GestureEvent::PanBy(Vec2::new(15.0, 0.0))));
//! // Releasing ends the gesture; no tap is produced.
//! let ev = gestures.pointer_up(120, 1, Point::new(15.0, 0.0));
//! assert_eq!(ev, Some(GestureEvent::GestureEnded));
//! ```

use kurbo::{Point, Vec2};

use crate::pointers::PointerTracker;

/// Time and distance thresholds for tap/gesture classification.
///
/// The defaults are empirical UX tuning carried over from the production
/// viewer; treat them as a starting point, not a correctness requirement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureThresholds {
    /// Maximum press-to-release time for a tap, in milliseconds.
    pub tap_max_duration_ms: u64,
    /// Maximum displacement from the start position for a tap, in pixels.
    /// Crossing it turns the sequence into a drag.
    pub tap_max_movement_px: f64,
    /// Tap suppression window after a gesture ends, in milliseconds.
    pub gesture_cooldown_ms: u64,
}

impl Default for GestureThresholds {
    fn default() -> Self {
        Self {
            tap_max_duration_ms: 300,
            tap_max_movement_px: 10.0,
            gesture_cooldown_ms: 200,
        }
    }
}

/// Transition produced by feeding one pointer event into the classifier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// Single-pointer drag moved by this screen-space delta.
    PanBy(Vec2),
    /// A second pointer arrived; the sequence is now a pinch.
    PinchBegan,
    /// The pinch pair moved.
    ///
    /// `ratio` is the inter-pointer distance change since the previous event
    /// (incremental, not cumulative); the midpoints let the caller keep the
    /// world point under the pinch fixed while the fingers travel.
    PinchMoved {
        /// `new_distance / previous_distance` between the two pointers.
        ratio: f64,
        /// Pair midpoint before this move.
        previous_midpoint: Point,
        /// Pair midpoint after this move.
        midpoint: Point,
    },
    /// The pinch dropped back to one pointer, which continues as a pan.
    PinchEnded,
    /// A completed press-release classified as a deliberate tap.
    Tap {
        /// Screen position of the release.
        pos: Point,
        /// Timestamp of the release, for double-tap pairing.
        time_ms: u64,
    },
    /// A drag or pinch sequence ended; taps are suppressed for the cooldown
    /// window.
    GestureEnded,
}

#[derive(Clone, Copy, Debug)]
struct PinchBaseline {
    distance: f64,
    midpoint: Point,
}

/// State machine classifying pointer sequences into pans, pinches, and taps.
///
/// States: Idle → Tracking (one pointer) → Panning or tap, with a parallel
/// pinch state entered and left as the pointer count crosses two. All
/// timestamps are explicit milliseconds supplied by the host.
#[derive(Clone, Debug)]
pub struct GestureClassifier {
    thresholds: GestureThresholds,
    pointers: PointerTracker,
    start_time_ms: u64,
    start_pos: Point,
    total_movement: f64,
    is_gesture: bool,
    cooldown_until_ms: Option<u64>,
    pinch: Option<PinchBaseline>,
}

impl GestureClassifier {
    /// Creates an idle classifier with the given thresholds.
    #[must_use]
    pub fn new(thresholds: GestureThresholds) -> Self {
        Self {
            thresholds,
            pointers: PointerTracker::new(),
            start_time_ms: 0,
            start_pos: Point::ZERO,
            total_movement: 0.0,
            is_gesture: false,
            cooldown_until_ms: None,
            pinch: None,
        }
    }

    /// Feeds a pointer-down event.
    pub fn pointer_down(&mut self, time_ms: u64, id: u64, pos: Point) -> Option<GestureEvent> {
        if self.pointers.is_empty() {
            // First pointer of a fresh sequence.
            self.start_time_ms = time_ms;
            self.start_pos = pos;
            self.total_movement = 0.0;
            self.is_gesture = false;
            self.pinch = None;
        }
        self.pointers.insert(id, pos);

        if self.pointers.len() == 2 {
            // A second finger always promotes the sequence to a gesture and
            // cancels any pan in progress.
            self.is_gesture = true;
            self.pinch = self.pair_baseline();
            return Some(GestureEvent::PinchBegan);
        }
        // Third and later pointers are tracked for identity only.
        None
    }

    /// Feeds a pointer-move event.
    ///
    /// Moves referencing an identifier never seen in a down event are
    /// ignored.
    pub fn pointer_move(&mut self, _time_ms: u64, id: u64, pos: Point) -> Option<GestureEvent> {
        let previous = self.pointers.update(id, pos)?;

        if let Some(baseline) = self.pinch {
            let (a, b) = self.pointers.pair()?;
            if a.0 != id && b.0 != id {
                // Extra fingers beyond the pinch pair don't drive anything.
                return None;
            }
            let distance = (b.1 - a.1).hypot();
            let midpoint = a.1.midpoint(b.1);
            if baseline.distance <= 0.0 {
                // Coincident fingers have no usable ratio; re-seed and wait.
                self.pinch = Some(PinchBaseline { distance, midpoint });
                return None;
            }
            let ratio = distance / baseline.distance;
            let previous_midpoint = baseline.midpoint;
            self.pinch = Some(PinchBaseline { distance, midpoint });
            return Some(GestureEvent::PinchMoved {
                ratio,
                previous_midpoint,
                midpoint,
            });
        }

        if self.pointers.len() != 1 {
            return None;
        }

        // Peak displacement from the start position; a move out past the
        // threshold and back cannot re-qualify as a tap.
        let displacement = (pos - self.start_pos).hypot();
        if displacement > self.total_movement {
            self.total_movement = displacement;
        }
        if !self.is_gesture && self.total_movement > self.thresholds.tap_max_movement_px {
            self.is_gesture = true;
        }
        if self.is_gesture {
            return Some(GestureEvent::PanBy(pos - previous));
        }
        None
    }

    /// Feeds a pointer-up event.
    pub fn pointer_up(&mut self, time_ms: u64, id: u64, pos: Point) -> Option<GestureEvent> {
        self.pointers.update(id, pos)?;
        self.pointers.remove(id);

        match self.pointers.len() {
            0 => {
                self.pinch = None;
                if self.is_gesture {
                    // Absorb the residual movement of a lifting finger.
                    self.cooldown_until_ms =
                        Some(time_ms + self.thresholds.gesture_cooldown_ms);
                    self.is_gesture = false;
                    Some(GestureEvent::GestureEnded)
                } else if self.qualifies_as_tap(time_ms) {
                    Some(GestureEvent::Tap { pos, time_ms })
                } else {
                    None
                }
            }
            1 => {
                // The surviving pointer becomes the new pan anchor; its slot
                // already holds the last known position.
                self.pinch.take().map(|_| GestureEvent::PinchEnded)
            }
            _ => {
                // Dropped from three or more: re-seed the baseline from the
                // surviving pair so the next move stays incremental.
                self.pinch = self.pair_baseline();
                None
            }
        }
    }

    /// Clears all tracking state without emitting a tap or a gesture end.
    ///
    /// Used for pointer-cancel/leave: the host lost the sequence, so nothing
    /// about it should produce side effects.
    pub fn cancel(&mut self) {
        self.pointers.clear();
        self.pinch = None;
        self.is_gesture = false;
        self.total_movement = 0.0;
    }

    /// Returns `true` while the current sequence is a drag or pinch.
    #[must_use]
    pub fn is_gesture(&self) -> bool {
        self.is_gesture
    }

    /// Returns `true` while two or more pointers drive a pinch.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.pinch.is_some()
    }

    /// Number of currently tracked pointers.
    #[must_use]
    pub fn active_pointers(&self) -> usize {
        self.pointers.len()
    }

    /// Returns `true` while taps are suppressed after a gesture.
    #[must_use]
    pub fn in_cooldown(&self, now_ms: u64) -> bool {
        self.cooldown_until_ms.is_some_and(|until| now_ms < until)
    }

    fn qualifies_as_tap(&self, time_ms: u64) -> bool {
        time_ms.saturating_sub(self.start_time_ms) < self.thresholds.tap_max_duration_ms
            && self.total_movement <= self.thresholds.tap_max_movement_px
            && !self.in_cooldown(time_ms)
    }

    fn pair_baseline(&self) -> Option<PinchBaseline> {
        self.pointers.pair().map(|(a, b)| PinchBaseline {
            distance: (b.1 - a.1).hypot(),
            midpoint: a.1.midpoint(b.1),
        })
    }
}
