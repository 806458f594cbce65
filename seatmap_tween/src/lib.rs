// Copyright 2026 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seatmap Tween: eased camera transitions for the seat-map viewer.
//!
//! Programmatic camera jumps (fit to view, zoom to a section, snap back to
//! the zoom floor) animate rather than teleport. This crate provides the
//! time-based interpolation for those transitions:
//!
//! - [`ease_out_cubic`]: the easing curve (fast start, gentle landing).
//! - [`CameraTween`]: a pure sampler from a timestamp to a camera value.
//! - [`TweenDriver`]: at most one live transition, where starting a new one
//!   supersedes the old (never queues), tracked by monotonically increasing
//!   run identifiers.
//!
//! There is no frame loop here. The host steps the driver from its own
//! animation tick with explicit millisecond timestamps, and the terminal
//! sample is forced exactly onto the target so no floating-point residue is
//! left on the camera.
//!
//! The run identifier exists for hosts whose frame callbacks can outlive the
//! transition that scheduled them: a callback holding a stale run id can ask
//! [`TweenDriver::is_current`] before writing, so a superseded run never
//! touches the camera again. In a strictly synchronous host, stepping the
//! driver alone is already safe — only the latest run is ever stepped.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Vec2;
//! use seatmap_camera::Camera;
//! use seatmap_tween::TweenDriver;
//!
//! let mut driver = TweenDriver::new();
//! let from = Camera::new(1.0, Vec2::ZERO);
//! let to = Camera::new(2.0, Vec2::new(100.0, 50.0));
//!
//! driver.start(from, to, 0, 500);
//! let mid = driver.step(250).unwrap();
//! assert!(mid.camera.scale > 1.0 && mid.camera.scale < 2.0);
//!
//! // Past the duration the camera lands exactly on the target.
//! let end = driver.step(500).unwrap();
//! assert_eq!(end.camera, to);
//! assert!(end.finished);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use seatmap_camera::Camera;

/// Cubic ease-out: `1 - (1 - t)³`.
///
/// Input is expected in `[0, 1]`; the curve starts fast and decelerates into
/// the target.
#[must_use]
pub fn ease_out_cubic(t: f64) -> f64 {
    let u = 1.0 - t;
    1.0 - u * u * u
}

/// A single camera transition, sampled purely from timestamps.
///
/// `sample` at or past the end time returns the target exactly — not an
/// asymptotic approximation — so a finished transition leaves the camera on
/// clean values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraTween {
    start: Camera,
    target: Camera,
    start_time_ms: u64,
    duration_ms: u64,
    run: u64,
}

impl CameraTween {
    /// Creates a transition from `start` to `target` beginning at
    /// `start_time_ms`.
    #[must_use]
    pub fn new(
        run: u64,
        start: Camera,
        target: Camera,
        start_time_ms: u64,
        duration_ms: u64,
    ) -> Self {
        Self {
            start,
            target,
            start_time_ms,
            duration_ms,
            run,
        }
    }

    /// The run identifier this transition was started under.
    #[must_use]
    pub fn run(&self) -> u64 {
        self.run
    }

    /// The camera this transition lands on.
    #[must_use]
    pub fn target(&self) -> Camera {
        self.target
    }

    /// Returns `true` once `now_ms` is at or past the end of the transition.
    #[must_use]
    pub fn is_finished(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_time_ms) >= self.duration_ms
    }

    /// Samples the camera at `now_ms`.
    #[must_use]
    pub fn sample(&self, now_ms: u64) -> Camera {
        let progress = self.progress(now_ms);
        if progress >= 1.0 {
            // Exact terminal value, no floating-point residue.
            return self.target;
        }
        let ease = ease_out_cubic(progress);
        Camera::new(
            lerp(self.start.scale, self.target.scale, ease),
            (
                lerp(self.start.origin.x, self.target.origin.x, ease),
                lerp(self.start.origin.y, self.target.origin.y, ease),
            )
                .into(),
        )
    }

    fn progress(&self, now_ms: u64) -> f64 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        let elapsed = now_ms.saturating_sub(self.start_time_ms) as f64;
        (elapsed / self.duration_ms as f64).clamp(0.0, 1.0)
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// One frame's worth of stepping the driver.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TweenStep {
    /// Camera value for this frame.
    pub camera: Camera,
    /// Run identifier of the transition that produced this sample.
    pub run: u64,
    /// `true` on the terminal frame; the driver is idle afterwards.
    pub finished: bool,
}

/// Holds at most one live [`CameraTween`], superseding on every start.
///
/// Run identifiers increase monotonically across starts; see the crate docs
/// for how hosts with detached frame callbacks use them.
#[derive(Clone, Debug, Default)]
pub struct TweenDriver {
    active: Option<CameraTween>,
    next_run: u64,
}

impl TweenDriver {
    /// Creates an idle driver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a transition, superseding any run in flight.
    ///
    /// `start` should be the camera's *current* value — mid-flight if a
    /// previous run was still animating — so the new transition picks up from
    /// wherever the view actually is. Returns the new run identifier.
    pub fn start(
        &mut self,
        start: Camera,
        target: Camera,
        start_time_ms: u64,
        duration_ms: u64,
    ) -> u64 {
        self.next_run += 1;
        let run = self.next_run;
        self.active = Some(CameraTween::new(run, start, target, start_time_ms, duration_ms));
        run
    }

    /// Samples the live transition at `now_ms`, retiring it on its terminal
    /// frame.
    ///
    /// Returns `None` while idle.
    pub fn step(&mut self, now_ms: u64) -> Option<TweenStep> {
        let tween = self.active?;
        let finished = tween.is_finished(now_ms);
        let step = TweenStep {
            camera: tween.sample(now_ms),
            run: tween.run(),
            finished,
        };
        if finished {
            self.active = None;
        }
        Some(step)
    }

    /// Drops the live transition without sampling it.
    pub fn stop(&mut self) {
        self.active = None;
    }

    /// Returns `true` while a transition is in flight.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// The run identifier of the live transition, if any.
    #[must_use]
    pub fn current_run(&self) -> Option<u64> {
        self.active.map(|t| t.run())
    }

    /// Returns `true` if `run` is the live transition's identifier.
    ///
    /// Stale frame callbacks check this before writing to the camera.
    #[must_use]
    pub fn is_current(&self, run: u64) -> bool {
        self.current_run() == Some(run)
    }
}
