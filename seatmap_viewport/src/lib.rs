// Copyright 2026 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seatmap Viewport: the seat-map viewer's input-to-camera engine.
//!
//! [`ViewportEngine`] turns raw pointer and wheel input into a constrained 2D
//! camera over the venue. It composes the lower-level kernels:
//!
//! - [`seatmap_camera`] solves fit, clamp, and anchor positions.
//! - [`seatmap_gesture`] classifies pointer sequences into pans, pinches,
//!   taps, and double taps.
//! - [`seatmap_tween`] eases programmatic camera jumps (fit to view, zoom to
//!   a section or point, snap back to the zoom floor).
//!
//! The engine owns the camera and all gesture/animation state, and nothing
//! else: no DOM, no scene graph, no clock. The host feeds it events with
//! explicit millisecond timestamps and steps [`ViewportEngine::tick`] from
//! its animation frame; every entry point returns the [`ViewportEvent`]s it
//! produced, which the host forwards to its transform/tap/double-tap
//! subscribers synchronously. `TransformChanged` carries the fitted initial
//! scale alongside the camera so zoom-dependent chrome (overlay fading, the
//! "reset zoom" control) can react without asking the engine back.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use seatmap_viewport::{ViewportConfig, ViewportEngine, ViewportEvent, WheelDelta};
//!
//! let mut engine = ViewportEngine::new(Size::new(800.0, 600.0), ViewportConfig::default());
//!
//! // First fit is immediate (no animation on initial load).
//! let events = engine.fit_content(0, Rect::new(0.0, 0.0, 2_000.0, 1_200.0));
//! assert!(matches!(events[0], ViewportEvent::TransformChanged { .. }));
//!
//! // Wheel zoom in about the cursor.
//! let events = engine.wheel(16, Point::new(400.0, 300.0), WheelDelta::Lines(-1.0));
//! assert!(engine.is_zoomed_in());
//! assert_eq!(events.len(), 1);
//! ```
//!
//! ## Event ordering
//!
//! Events are processed strictly in the order the host delivers them; a pinch
//! that starts mid-pan sees the pan's last-known pointer position as its
//! baseline. Everything is single-threaded and synchronous — "last writer
//! wins per event" is the whole concurrency story, with the tween driver's
//! run identifiers covering hosts whose frame callbacks can outlive a
//! superseded animation.

mod config;
mod engine;
mod event;

pub use config::ViewportConfig;
pub use engine::{ViewportDebugInfo, ViewportEngine};
pub use event::{ViewportEvent, WheelDelta};
