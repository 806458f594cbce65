// Copyright 2026 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seatmap Camera: camera state and fit/clamp solvers for the seat-map viewport.
//!
//! This crate provides the small, headless model of the viewer's 2D camera:
//! a uniform pan+zoom transform mapping the venue's world space into screen
//! pixels. It focuses on:
//! - Camera state and coordinate conversion between world and screen space.
//! - Fitting a content bounding box into the screen ([`fit::fit_camera`]).
//! - Clamping a candidate camera position so content never leaves the visible
//!   area, or is centered when it is smaller than the screen
//!   ([`fit::constrain_origin`]).
//! - Solving the scale and position for section zoom and anchor-preserving
//!   zoom ([`fit::section_scale`], [`fit::anchored_origin`]).
//!
//! It does **not** own any scene data or rendering backend, and it holds no
//! gesture or animation state. Callers are expected to:
//! - Maintain their own seat/section scene and its bounding boxes.
//! - Wire pointer/wheel input into camera mutations at a higher layer.
//! - Read [`Camera::affine`] (or the fields directly) once per rendered frame.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use seatmap_camera::{Camera, fit};
//!
//! // Fit a 200x100 venue into an 800x600 screen with no padding.
//! let bounds = Rect::new(0.0, 0.0, 200.0, 100.0);
//! let screen = Size::new(800.0, 600.0);
//! let camera = fit::fit_camera(bounds, screen, 0.0, 1.0).unwrap();
//! assert_eq!(camera.scale, 1.0);
//!
//! // The venue center lands on the screen center.
//! let center = camera.world_to_screen(bounds.center());
//! assert_eq!(center, Point::new(400.0, 300.0));
//! ```
//!
//! ## Design notes
//!
//! - The camera is axis-aligned with a **uniform** scale; rotation is out of
//!   scope for the seat-map viewer.
//! - All solver functions in [`fit`] are pure; callers decide when and whether
//!   to apply their results to a camera.
//! - Degenerate inputs (zero-size fit targets, zero-size section rectangles)
//!   are reported as `None` or clamped, never propagated as NaN.
//!
//! This crate is `no_std`.

#![no_std]

mod camera;
pub mod fit;

pub use camera::{Camera, ZOOMED_IN_SLACK};
