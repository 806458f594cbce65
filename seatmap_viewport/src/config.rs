// Copyright 2026 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use seatmap_gesture::classifier::GestureThresholds;
use seatmap_gesture::double_tap::DoubleTapConfig;

/// Tunable parameters for the viewport engine.
///
/// Every field has a production default; construct with
/// `ViewportConfig::default()` and override what the embedding needs. The
/// gesture and double-tap thresholds are empirical UX tuning, not correctness
/// requirements.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportConfig {
    /// Screen-edge padding for fit and section-zoom solves, in pixels.
    pub padding: f64,
    /// Scale cap for [`fit_content`](crate::ViewportEngine::fit_content): a
    /// small venue is never blown up past its authored size.
    pub fit_max_scale: f64,
    /// Zoom floor override. `None` uses the fitted initial scale, so the user
    /// can never zoom out past the fitted view.
    pub min_zoom: Option<f64>,
    /// Zoom ceiling for wheel and pinch.
    pub max_zoom: f64,
    /// Zoom ceiling for section zoom, which lands on a calmer magnification
    /// than free zooming allows.
    pub section_max_zoom: f64,
    /// Multiplier applied on top of the plain section fit so the section
    /// fills the screen slightly tighter.
    pub section_zoom_boost: f64,
    /// Zoom factor per wheel notch.
    pub zoom_speed: f64,
    /// Duration of eased camera transitions, in milliseconds.
    pub animation_duration_ms: u64,
    /// Tap/pan/cooldown thresholds for the gesture classifier.
    pub gestures: GestureThresholds,
    /// Pairing window for the double-tap detector.
    pub double_tap: DoubleTapConfig,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            padding: 20.0,
            fit_max_scale: 1.0,
            min_zoom: None,
            max_zoom: 5.0,
            section_max_zoom: 3.0,
            section_zoom_boost: 1.2,
            zoom_speed: 1.1,
            animation_duration_ms: 500,
            gestures: GestureThresholds::default(),
            double_tap: DoubleTapConfig::default(),
        }
    }
}
