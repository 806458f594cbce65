// Copyright 2026 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};
use seatmap_camera::{Camera, fit};
use seatmap_gesture::classifier::{GestureClassifier, GestureEvent};
use seatmap_gesture::double_tap::{DoubleTapDetector, TapOutcome};
use seatmap_tween::TweenDriver;

use crate::config::ViewportConfig;
use crate::event::{ViewportEvent, WheelDelta};

/// The seat-map viewer's input-to-camera engine.
///
/// Owns the camera, the content bounds of the most recent fit, the gesture
/// classifier, the double-tap detector, and the tween driver. See the crate
/// docs for the interaction model; the short version is: feed pointer/wheel
/// events and `tick` with host timestamps, apply the returned
/// [`ViewportEvent`]s, and read [`ViewportEngine::camera`] when rendering.
///
/// Pan, pinch, and wheel input is ignored until the first successful
/// [`fit_content`](ViewportEngine::fit_content): before that there is no
/// constraint frame, no zoom floor, and no initial scale to honor.
#[derive(Clone, Debug)]
pub struct ViewportEngine {
    config: ViewportConfig,
    screen: Size,
    camera: Camera,
    content_bounds: Option<Rect>,
    initial_scale: Option<f64>,
    gestures: GestureClassifier,
    taps: DoubleTapDetector,
    tweens: TweenDriver,
}

impl ViewportEngine {
    /// Creates an engine for a screen of the given size.
    #[must_use]
    pub fn new(screen: Size, config: ViewportConfig) -> Self {
        Self {
            gestures: GestureClassifier::new(config.gestures),
            taps: DoubleTapDetector::new(config.double_tap),
            tweens: TweenDriver::new(),
            camera: Camera::IDENTITY,
            content_bounds: None,
            initial_scale: None,
            screen,
            config,
        }
    }

    /// Fits `bounds` into the screen and makes it the constraint frame.
    ///
    /// The first successful fit applies immediately (no animation on initial
    /// load); later fits ease over from wherever the camera is. A zero-size
    /// `bounds` is skipped entirely — the prior camera, bounds, and initial
    /// scale all stay in place.
    pub fn fit_content(&mut self, now_ms: u64, bounds: Rect) -> Vec<ViewportEvent> {
        let Some(target) = fit::fit_camera(
            bounds,
            self.screen,
            self.config.padding,
            self.config.fit_max_scale,
        ) else {
            return Vec::new();
        };

        self.content_bounds = Some(bounds);
        let first_fit = self.initial_scale.is_none();
        self.initial_scale = Some(target.scale);

        if first_fit {
            self.camera = target;
            return vec![self.transform_changed()];
        }
        self.tweens
            .start(self.camera, target, now_ms, self.config.animation_duration_ms);
        Vec::new()
    }

    /// Feeds a pointer-down event.
    pub fn pointer_down(&mut self, now_ms: u64, id: u64, pos: Point) -> Vec<ViewportEvent> {
        self.gestures.pointer_down(now_ms, id, pos);
        Vec::new()
    }

    /// Feeds a pointer-move event. Unknown pointer identifiers are ignored.
    pub fn pointer_move(&mut self, now_ms: u64, id: u64, pos: Point) -> Vec<ViewportEvent> {
        match self.gestures.pointer_move(now_ms, id, pos) {
            Some(GestureEvent::PanBy(delta)) => self.apply_pan(delta),
            Some(GestureEvent::PinchMoved {
                ratio,
                previous_midpoint,
                midpoint,
            }) => self.apply_pinch(ratio, previous_midpoint, midpoint),
            _ => Vec::new(),
        }
    }

    /// Feeds a pointer-up event.
    ///
    /// A release that classifies as a tap goes through double-tap pairing:
    /// a pairing tap yields [`ViewportEvent::DoubleTap`] immediately, while a
    /// first tap is deferred and surfaces as [`ViewportEvent::Tap`] from a
    /// later [`tick`](ViewportEngine::tick).
    pub fn pointer_up(&mut self, now_ms: u64, id: u64, pos: Point) -> Vec<ViewportEvent> {
        match self.gestures.pointer_up(now_ms, id, pos) {
            Some(GestureEvent::Tap { pos, time_ms }) => match self.taps.on_tap(time_ms, pos) {
                TapOutcome::DoubleTap(pair_pos) => vec![ViewportEvent::DoubleTap(pair_pos)],
                TapOutcome::Pending => Vec::new(),
            },
            _ => Vec::new(),
        }
    }

    /// Handles pointer-cancel/leave: all gesture tracking is dropped without
    /// emitting anything.
    pub fn cancel(&mut self) {
        self.gestures.cancel();
    }

    /// Feeds a wheel event at the given cursor position.
    ///
    /// Zooming in (or out above the floor) applies immediately, anchored at
    /// the cursor. Zooming out past the floor instead starts the
    /// snap-to-minimum transition: back to the fitted scale, recentered on
    /// the content center.
    pub fn wheel(&mut self, now_ms: u64, cursor: Point, delta: WheelDelta) -> Vec<ViewportEvent> {
        if self.initial_scale.is_none() {
            return Vec::new();
        }
        let notches = delta.notches();
        if notches == 0.0 || !notches.is_finite() {
            return Vec::new();
        }

        let factor = self.config.zoom_speed.powf(-notches);
        let floor = self.min_scale();
        let raw_scale = self.camera.scale * factor;

        if raw_scale < floor {
            if self.camera.scale > floor {
                self.start_snap_to_floor(now_ms, floor);
            }
            return Vec::new();
        }

        let new_scale = raw_scale.min(self.config.max_zoom);
        if new_scale == self.camera.scale {
            return Vec::new();
        }
        self.tweens.stop();
        let origin = fit::anchored_origin(&self.camera, cursor, new_scale);
        self.camera.scale = new_scale;
        self.camera.origin =
            fit::constrain_origin(origin, new_scale, self.content_bounds, self.screen);
        vec![self.transform_changed()]
    }

    /// Eases the camera onto a section rectangle (world space).
    ///
    /// The section is fitted with [`section_zoom_boost`] applied and capped
    /// at [`section_max_zoom`]; a degenerate rectangle clamps to the cap
    /// rather than producing a non-finite scale.
    ///
    /// [`section_zoom_boost`]: ViewportConfig::section_zoom_boost
    /// [`section_max_zoom`]: ViewportConfig::section_max_zoom
    pub fn zoom_to_section(&mut self, now_ms: u64, section: Rect) -> Vec<ViewportEvent> {
        if self.initial_scale.is_none() {
            return Vec::new();
        }
        let scale = fit::section_scale(
            section.size(),
            self.screen,
            self.config.padding,
            self.config.section_zoom_boost,
            self.config.section_max_zoom,
        )
        .max(self.min_scale());

        let origin = fit::centered_origin(section.center(), scale, self.screen);
        let origin = fit::constrain_origin(origin, scale, self.content_bounds, self.screen);
        self.tweens.start(
            self.camera,
            Camera::new(scale, origin),
            now_ms,
            self.config.animation_duration_ms,
        );
        Vec::new()
    }

    /// Eases the camera to `target_scale`, keeping the world point under
    /// `anchor` fixed (the double-tap zoom path).
    ///
    /// The scale is clamped into `[floor, max_zoom]`; a non-finite request
    /// clamps to the ceiling.
    pub fn zoom_to_point(
        &mut self,
        now_ms: u64,
        anchor: Point,
        target_scale: f64,
    ) -> Vec<ViewportEvent> {
        if self.initial_scale.is_none() {
            return Vec::new();
        }
        let scale = if target_scale.is_finite() {
            target_scale
        } else {
            self.config.max_zoom
        };
        let scale = scale.max(self.min_scale()).min(self.config.max_zoom);

        let origin = fit::anchored_origin(&self.camera, anchor, scale);
        let origin = fit::constrain_origin(origin, scale, self.content_bounds, self.screen);
        self.tweens.start(
            self.camera,
            Camera::new(scale, origin),
            now_ms,
            self.config.animation_duration_ms,
        );
        Vec::new()
    }

    /// Advances time: steps the live transition and fires due deferred taps.
    ///
    /// Hosts call this from their animation frame. Each in-flight transition
    /// frame emits [`ViewportEvent::TransformChanged`], including the
    /// terminal frame, which lands exactly on the target.
    pub fn tick(&mut self, now_ms: u64) -> Vec<ViewportEvent> {
        let mut events = Vec::new();
        if let Some(step) = self.tweens.step(now_ms) {
            self.camera = step.camera;
            events.push(self.transform_changed());
        }
        if let Some(pos) = self.taps.poll(now_ms) {
            events.push(ViewportEvent::Tap(pos));
        }
        events
    }

    /// Updates the screen size, re-constraining the camera against it.
    pub fn resize(&mut self, screen: Size) -> Vec<ViewportEvent> {
        self.screen = screen;
        if self.initial_scale.is_none() {
            return Vec::new();
        }
        let constrained = fit::constrain_origin(
            self.camera.origin,
            self.camera.scale,
            self.content_bounds,
            self.screen,
        );
        if constrained == self.camera.origin {
            return Vec::new();
        }
        self.camera.origin = constrained;
        vec![self.transform_changed()]
    }

    /// The current camera; the rendering layer reads this every frame.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    /// The current screen size.
    #[must_use]
    pub fn screen_size(&self) -> Size {
        self.screen
    }

    /// The constraint bounds of the most recent fit, if any.
    #[must_use]
    pub fn content_bounds(&self) -> Option<Rect> {
        self.content_bounds
    }

    /// The scale of the most recent fit, if any.
    #[must_use]
    pub fn initial_scale(&self) -> Option<f64> {
        self.initial_scale
    }

    /// Returns `true` once the camera is zoomed in past the fitted view.
    #[must_use]
    pub fn is_zoomed_in(&self) -> bool {
        self.initial_scale
            .is_some_and(|initial| self.camera.is_zoomed_in(initial))
    }

    /// Returns `true` while a camera transition is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.tweens.is_active()
    }

    /// Snapshot of the engine state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            camera: self.camera,
            screen: self.screen,
            content_bounds: self.content_bounds,
            initial_scale: self.initial_scale,
            active_pointers: self.gestures.active_pointers(),
            is_pinching: self.gestures.is_pinching(),
            is_animating: self.tweens.is_active(),
        }
    }

    fn apply_pan(&mut self, delta: Vec2) -> Vec<ViewportEvent> {
        let Some(initial) = self.initial_scale else {
            return Vec::new();
        };
        // Panning a fully zoomed-out view would only fight the constraint.
        if !self.camera.is_zoomed_in(initial) {
            return Vec::new();
        }
        let constrained = fit::constrain_origin(
            self.camera.origin + delta,
            self.camera.scale,
            self.content_bounds,
            self.screen,
        );
        if constrained == self.camera.origin {
            return Vec::new();
        }
        self.tweens.stop();
        self.camera.origin = constrained;
        vec![self.transform_changed()]
    }

    fn apply_pinch(
        &mut self,
        ratio: f64,
        previous_midpoint: Point,
        midpoint: Point,
    ) -> Vec<ViewportEvent> {
        if self.initial_scale.is_none() {
            return Vec::new();
        }
        if !ratio.is_finite() || ratio <= 0.0 {
            return Vec::new();
        }
        let new_scale = (self.camera.scale * ratio)
            .max(self.min_scale())
            .min(self.config.max_zoom);

        // Pin the world point that was under the pair midpoint to the moving
        // midpoint: spreading fingers zooms, travelling fingers pan.
        let world = self.camera.screen_to_world(previous_midpoint);
        let origin = midpoint.to_vec2() - world.to_vec2() * new_scale;
        let origin = fit::constrain_origin(origin, new_scale, self.content_bounds, self.screen);

        let updated = Camera::new(new_scale, origin);
        if updated == self.camera {
            return Vec::new();
        }
        self.tweens.stop();
        self.camera = updated;
        vec![self.transform_changed()]
    }

    fn start_snap_to_floor(&mut self, now_ms: u64, floor: f64) {
        let Some(bounds) = self.content_bounds else {
            return;
        };
        let origin = fit::centered_origin(bounds.center(), floor, self.screen);
        let origin = fit::constrain_origin(origin, floor, self.content_bounds, self.screen);
        self.tweens.start(
            self.camera,
            Camera::new(floor, origin),
            now_ms,
            self.config.animation_duration_ms,
        );
    }

    fn min_scale(&self) -> f64 {
        self.config
            .min_zoom
            .or(self.initial_scale)
            .unwrap_or(f64::MIN_POSITIVE)
    }

    fn transform_changed(&self) -> ViewportEvent {
        ViewportEvent::TransformChanged {
            camera: self.camera,
            initial_scale: self.initial_scale.unwrap_or(self.camera.scale),
        }
    }
}

/// Debug snapshot of a [`ViewportEngine`]'s state.
#[derive(Clone, Copy, Debug)]
pub struct ViewportDebugInfo {
    /// Current camera.
    pub camera: Camera,
    /// Current screen size.
    pub screen: Size,
    /// Constraint bounds of the most recent fit.
    pub content_bounds: Option<Rect>,
    /// Scale of the most recent fit.
    pub initial_scale: Option<f64>,
    /// Number of tracked pointers.
    pub active_pointers: usize,
    /// Whether a pinch is in progress.
    pub is_pinching: bool,
    /// Whether a camera transition is in flight.
    pub is_animating: bool,
}
