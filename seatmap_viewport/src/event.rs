// Copyright 2026 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use seatmap_camera::Camera;

/// Pixels of wheel delta treated as one notch when the host reports
/// pixel-granular scrolling.
const PIXELS_PER_NOTCH: f64 = 100.0;

/// A wheel event's vertical delta, in the host's reporting mode.
///
/// Browsers and windowing layers disagree on wheel units; the engine
/// normalizes both modes to "notches" before applying
/// [`zoom_speed`](crate::ViewportConfig::zoom_speed). Positive deltas zoom
/// out, matching the usual scroll-down convention.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WheelDelta {
    /// Pixel-granular delta (touchpads, pointer wheels in pixel mode).
    Pixels(f64),
    /// Line-granular delta (classic mouse wheels); one line is one notch.
    Lines(f64),
}

impl WheelDelta {
    /// Normalizes the delta to wheel notches.
    #[must_use]
    pub fn notches(self) -> f64 {
        match self {
            Self::Pixels(px) => px / PIXELS_PER_NOTCH,
            Self::Lines(lines) => lines,
        }
    }
}

/// Notification produced by an engine entry point.
///
/// The host forwards these to its subscribers synchronously, in order. Taps
/// arrive deferred (a first tap only fires once its double-tap window
/// expires, via [`tick`](crate::ViewportEngine::tick)); double taps arrive
/// immediately on the pairing tap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewportEvent {
    /// The camera changed. Emitted for every pan, pinch, and wheel mutation
    /// and for every animation frame, including the terminal one.
    TransformChanged {
        /// The camera after the mutation.
        camera: Camera,
        /// Scale of the most recent fit; consumers compare against it for
        /// zoom-dependent chrome (overlay fading, "reset zoom" visibility).
        initial_scale: f64,
    },
    /// A deliberate single tap, fired after its double-tap window expired.
    Tap(Point),
    /// Two taps paired within the double-tap window.
    DoubleTap(Point),
}
