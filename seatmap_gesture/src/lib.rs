// Copyright 2026 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seatmap Gesture: stateful managers for the seat-map viewer's pointer
//! interactions.
//!
//! This crate provides small, focused state machines for the interactions
//! that need tracking across multiple events. Each module handles one
//! pattern:
//!
//! - [`pointers`]: last known position per active pointer, ordered by arrival
//! - [`classifier`]: pan vs. pinch vs. tap classification with time/distance
//!   thresholds and a post-gesture cooldown
//! - [`double_tap`]: double-tap detection with a deadline-based deferred
//!   single tap
//!
//! ## Design Philosophy
//!
//! Each manager is:
//!
//! - **Minimal and focused**: one interaction pattern per type
//! - **Stateful but simple**: just enough state to compute transitions
//! - **Host-agnostic**: timestamps arrive as explicit milliseconds; there is
//!   no internal clock, timer thread, or event loop
//!
//! The crate does not assume any particular windowing system or event
//! vocabulary. Managers accept raw `(time, pointer id, position)` triples and
//! return transition values — [`classifier::GestureEvent`],
//! [`double_tap::TapOutcome`] — that the caller interprets; camera math and
//! rendering live elsewhere.
//!
//! ## Usage pattern
//!
//! ```rust
//! use kurbo::Point;
//! use seatmap_gesture::classifier::{GestureClassifier, GestureEvent, GestureThresholds};
//!
//! let mut gestures = GestureClassifier::new(GestureThresholds::default());
//!
//! // A quick press-release with no movement classifies as a tap.
//! gestures.pointer_down(0, 1, Point::new(10.0, 10.0));
//! let up = gestures.pointer_up(150, 1, Point::new(11.0, 10.0));
//! assert!(matches!(up, Some(GestureEvent::Tap { .. })));
//! ```
//!
//! Taps are then fed into [`double_tap::DoubleTapDetector`], which either
//! reports a double tap immediately or defers the single tap until its
//! window expires:
//!
//! ```rust
//! use kurbo::Point;
//! use seatmap_gesture::double_tap::{DoubleTapConfig, DoubleTapDetector, TapOutcome};
//!
//! let mut taps = DoubleTapDetector::new(DoubleTapConfig::default());
//!
//! assert_eq!(taps.on_tap(0, Point::new(100.0, 100.0)), TapOutcome::Pending);
//! // A second tap inside the window fires the double tap...
//! let outcome = taps.on_tap(200, Point::new(110.0, 105.0));
//! assert!(matches!(outcome, TapOutcome::DoubleTap(_)));
//! // ...and the deferred single tap never fires.
//! assert_eq!(taps.poll(1_000), None);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod classifier;
pub mod double_tap;
pub mod pointers;
