// Copyright 2026 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure fit, clamp, and anchor solvers for the seat-map camera.
//!
//! Every function here is a total function from finite numeric inputs to a
//! camera (or part of one); nothing mutates shared state and nothing panics.
//! Degenerate fit targets are reported as `None` ([`fit_camera`]) or clamped
//! to the nearest usable bound ([`section_scale`]); callers keep their prior
//! camera in those cases. Non-finite inputs from malformed scene data are the
//! upstream validator's responsibility and are not re-checked here.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Size, Vec2};
//! use seatmap_camera::fit;
//!
//! let bounds = Rect::new(0.0, 0.0, 2_000.0, 1_000.0);
//! let screen = Size::new(800.0, 600.0);
//!
//! let camera = fit::fit_camera(bounds, screen, 0.0, 1.0).unwrap();
//!
//! // A candidate position far outside the content is pulled back so the
//! // content keeps covering the screen.
//! let clamped = fit::constrain_origin(
//!     camera.origin + Vec2::new(5_000.0, 0.0),
//!     camera.scale,
//!     Some(bounds),
//!     screen,
//! );
//! assert_ne!(clamped.x, camera.origin.x + 5_000.0);
//! ```

use kurbo::{Point, Rect, Size, Vec2};

use crate::Camera;

/// Computes the camera that fits `target` into `screen`, preserving aspect
/// ratio and leaving `padding` pixels on every side.
///
/// The scale is `min(available_width / target.width, available_height /
/// target.height, max_scale)`; the position centers `target` on the screen.
/// Returns `None` when `target` has zero (or negative) width or height, or
/// when the padding leaves no usable screen area — the caller keeps its prior
/// camera in that case.
#[must_use]
pub fn fit_camera(target: Rect, screen: Size, padding: f64, max_scale: f64) -> Option<Camera> {
    if target.width() <= 0.0 || target.height() <= 0.0 {
        return None;
    }
    let avail_w = screen.width - 2.0 * padding;
    let avail_h = screen.height - 2.0 * padding;
    if avail_w <= 0.0 || avail_h <= 0.0 {
        return None;
    }

    let scale = (avail_w / target.width())
        .min(avail_h / target.height())
        .min(max_scale);
    let origin = centered_origin(target.center(), scale, screen);
    Some(Camera::new(scale, origin))
}

/// Clamps a candidate camera origin against optional content bounds.
///
/// Each axis is handled independently: content smaller than the screen on an
/// axis is centered there (the candidate is ignored), while larger content is
/// clamped so its scaled extent never leaves `[0, screen_extent]` — no gap
/// opens up between a content edge and the screen edge. With `bounds` of
/// `None` the candidate passes through unchanged.
#[must_use]
pub fn constrain_origin(origin: Vec2, scale: f64, bounds: Option<Rect>, screen: Size) -> Vec2 {
    let Some(bounds) = bounds else {
        return origin;
    };
    if bounds.width() <= 0.0 || bounds.height() <= 0.0 {
        return origin;
    }
    Vec2::new(
        constrain_axis(origin.x, scale, bounds.min_x(), bounds.max_x(), screen.width),
        constrain_axis(origin.y, scale, bounds.min_y(), bounds.max_y(), screen.height),
    )
}

fn constrain_axis(
    candidate: f64,
    scale: f64,
    content_min: f64,
    content_max: f64,
    screen_extent: f64,
) -> f64 {
    let content_extent = (content_max - content_min) * scale;
    if content_extent < screen_extent {
        // Undersized content is centered; the candidate is ignored.
        (screen_extent - content_extent) / 2.0 - content_min * scale
    } else {
        // Rounding can put the two bounds a few ulps out of order when the
        // content only just covers the screen, so this stays min/max rather
        // than `f64::clamp`.
        let min_allowed = screen_extent - content_max * scale;
        let max_allowed = -content_min * scale;
        candidate.max(min_allowed).min(max_allowed)
    }
}

/// Computes the scale for zooming to a section rectangle.
///
/// The section is fitted into the padded screen the same way as
/// [`fit_camera`], then boosted by `zoom_boost` and capped at `max_zoom`. A
/// zero-size rectangle divides out to infinity (or NaN); the result lands on
/// `max_zoom` instead of poisoning the camera.
#[must_use]
pub fn section_scale(
    section: Size,
    screen: Size,
    padding: f64,
    zoom_boost: f64,
    max_zoom: f64,
) -> f64 {
    let sx = (screen.width - 2.0 * padding) / section.width;
    let sy = (screen.height - 2.0 * padding) / section.height;
    let scale = sx.min(sy) * zoom_boost;
    if !scale.is_finite() || scale <= 0.0 {
        return max_zoom;
    }
    scale.min(max_zoom)
}

/// Computes the origin that keeps the world point currently under `anchor`
/// fixed at `anchor` after rescaling to `new_scale`.
///
/// This is the position half of anchor zoom: wheel zoom about the cursor and
/// double-tap zoom about the tap point both resolve the world point under the
/// anchor against the *old* camera and solve for the translation that puts it
/// back under the same screen point at the new scale.
#[must_use]
pub fn anchored_origin(camera: &Camera, anchor: Point, new_scale: f64) -> Vec2 {
    let world = camera.screen_to_world(anchor);
    anchor.to_vec2() - world.to_vec2() * new_scale
}

/// Computes the origin that places `world_center` at the screen center at the
/// given scale.
#[must_use]
pub fn centered_origin(world_center: Point, scale: f64, screen: Size) -> Vec2 {
    Vec2::new(screen.width / 2.0, screen.height / 2.0) - world_center.to_vec2() * scale
}
