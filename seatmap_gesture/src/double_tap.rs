// Copyright 2026 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Double-tap detection with a deadline-based deferred single tap.
//!
//! A tap cannot be reported as "single" the moment it lands, because a second
//! tap may still turn the pair into a double tap. The detector therefore
//! defers every first tap until its pairing window expires: [`DoubleTapDetector::on_tap`]
//! either reports a double tap immediately or records a pending single tap,
//! and [`DoubleTapDetector::poll`] fires pending taps whose deadline has
//! passed. There is no timer thread — the host calls `poll` from its frame
//! loop (or any other heartbeat) with the current time.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use seatmap_gesture::double_tap::{DoubleTapConfig, DoubleTapDetector, TapOutcome};
//!
//! let mut taps = DoubleTapDetector::new(DoubleTapConfig::default());
//!
//! // A lone tap is deferred, then fires once its window expires.
//! assert_eq!(taps.on_tap(0, Point::new(10.0, 10.0)), TapOutcome::Pending);
//! assert_eq!(taps.poll(100), None);
//! assert_eq!(taps.poll(300), Some(Point::new(10.0, 10.0)));
//! assert_eq!(taps.poll(400), None);
//! ```

use kurbo::Point;

/// Pairing window for double taps.
///
/// Like the gesture thresholds, these are empirical UX tuning values, kept
/// configurable rather than baked in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DoubleTapConfig {
    /// Maximum time between two taps of a pair, in milliseconds. Also the
    /// deferral delay for a single tap.
    pub max_delay_ms: u64,
    /// Maximum distance between two taps of a pair, in pixels.
    pub max_distance_px: f64,
}

impl Default for DoubleTapConfig {
    fn default() -> Self {
        Self {
            max_delay_ms: 300,
            max_distance_px: 50.0,
        }
    }
}

/// Immediate result of feeding a tap into the detector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TapOutcome {
    /// The tap was recorded; it fires as a single tap via
    /// [`DoubleTapDetector::poll`] unless a second tap pairs with it first.
    Pending,
    /// The tap completed a pair; the deferred single tap was cancelled.
    DoubleTap(Point),
}

#[derive(Clone, Copy, Debug)]
struct PendingTap {
    pos: Point,
    deadline_ms: u64,
}

/// Pairs taps into double taps and defers lone taps until their window
/// expires.
///
/// At most one single tap is pending at a time; recording a new one
/// supersedes any unfired predecessor.
#[derive(Clone, Debug)]
pub struct DoubleTapDetector {
    config: DoubleTapConfig,
    last_tap: Option<(u64, Point)>,
    pending: Option<PendingTap>,
}

impl DoubleTapDetector {
    /// Creates an empty detector with the given pairing window.
    #[must_use]
    pub fn new(config: DoubleTapConfig) -> Self {
        Self {
            config,
            last_tap: None,
            pending: None,
        }
    }

    /// Feeds a classified tap at `pos` and time `time_ms`.
    pub fn on_tap(&mut self, time_ms: u64, pos: Point) -> TapOutcome {
        if let Some((last_time, last_pos)) = self.last_tap {
            if time_ms.saturating_sub(last_time) <= self.config.max_delay_ms
                && (pos - last_pos).hypot() <= self.config.max_distance_px
            {
                self.last_tap = None;
                self.pending = None;
                return TapOutcome::DoubleTap(pos);
            }
        }
        self.last_tap = Some((time_ms, pos));
        self.pending = Some(PendingTap {
            pos,
            deadline_ms: time_ms + self.config.max_delay_ms,
        });
        TapOutcome::Pending
    }

    /// Fires the pending single tap if its deadline has passed.
    ///
    /// Returns the tap position at most once per recorded tap; firing also
    /// closes the pairing window, so a later tap starts fresh.
    pub fn poll(&mut self, now_ms: u64) -> Option<Point> {
        if !self.pending.is_some_and(|p| now_ms >= p.deadline_ms) {
            return None;
        }
        self.last_tap = None;
        self.pending.take().map(|p| p.pos)
    }

    /// Returns `true` while a deferred single tap is waiting to fire.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drops all tap state without firing anything.
    pub fn clear(&mut self) {
        self.last_tap = None;
        self.pending = None;
    }
}
