// Copyright 2026 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

/// Slack factor applied to a reference scale when deciding whether the view
/// counts as zoomed in.
///
/// Pinch and animation arithmetic can leave the scale a hair away from the
/// fitted value; the view is only treated as zoomed in once it exceeds the
/// reference scale by this factor.
pub const ZOOMED_IN_SLACK: f64 = 1.001;

/// Uniform scale + translation mapping world coordinates to screen pixels.
///
/// The transform is `screen = world * scale + origin`. `Camera` is plain
/// data: every pan, pinch, wheel, and animation step produces a new value (or
/// mutates the fields in place), and the rendering layer reads it back each
/// frame, typically via [`Camera::affine`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    /// Pixels per world unit. Larger means zoomed in.
    pub scale: f64,
    /// Screen-space position of the world origin.
    pub origin: Vec2,
}

impl Camera {
    /// Identity camera: world coordinates map directly to screen pixels.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        origin: Vec2::ZERO,
    };

    /// Creates a camera from a scale and a screen-space origin.
    #[must_use]
    pub const fn new(scale: f64, origin: Vec2) -> Self {
        Self { scale, origin }
    }

    /// Returns the world→screen transform as an affine (scale, then translate).
    #[must_use]
    pub fn affine(&self) -> Affine {
        Affine::translate(self.origin) * Affine::scale(self.scale)
    }

    /// Converts a world-space point into screen coordinates.
    #[must_use]
    pub fn world_to_screen(&self, pt: Point) -> Point {
        (pt.to_vec2() * self.scale + self.origin).to_point()
    }

    /// Converts a screen-space point into world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, pt: Point) -> Point {
        ((pt.to_vec2() - self.origin) / self.scale).to_point()
    }

    /// Returns the world-space rectangle visible through a screen of the
    /// given size.
    ///
    /// Useful for culling: seats and sections whose bounds do not intersect
    /// this rectangle need not be drawn.
    #[must_use]
    pub fn visible_world_rect(&self, screen: Size) -> Rect {
        let min = self.screen_to_world(Point::ZERO);
        let max = self.screen_to_world(Point::new(screen.width, screen.height));
        Rect::new(min.x, min.y, max.x, max.y)
    }

    /// Returns `true` once the camera is zoomed in past `reference_scale`.
    ///
    /// The comparison carries [`ZOOMED_IN_SLACK`] so a camera sitting on the
    /// fitted scale (up to floating-point residue) does not count as zoomed
    /// in.
    #[must_use]
    pub fn is_zoomed_in(&self, reference_scale: f64) -> bool {
        self.scale > reference_scale * ZOOMED_IN_SLACK
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};

    use super::{Camera, ZOOMED_IN_SLACK};

    #[test]
    fn world_screen_roundtrip() {
        let camera = Camera::new(2.5, Vec2::new(40.0, -10.0));

        let world = Point::new(17.0, -3.5);
        let screen = camera.world_to_screen(world);
        let back = camera.screen_to_world(screen);

        assert!((back.x - world.x).abs() < 1e-9);
        assert!((back.y - world.y).abs() < 1e-9);
    }

    #[test]
    fn affine_matches_manual_transform() {
        let camera = Camera::new(3.0, Vec2::new(5.0, 7.0));
        let pt = Point::new(2.0, -1.0);

        let via_affine = camera.affine() * pt;
        let via_camera = camera.world_to_screen(pt);

        assert!((via_affine.x - via_camera.x).abs() < 1e-9);
        assert!((via_affine.y - via_camera.y).abs() < 1e-9);
    }

    #[test]
    fn zoomed_in_needs_slack() {
        let reference = 0.5;

        // Sitting exactly on the reference scale is not zoomed in.
        assert!(!Camera::new(reference, Vec2::ZERO).is_zoomed_in(reference));
        // Neither is a hair above it.
        assert!(!Camera::new(reference * 1.0005, Vec2::ZERO).is_zoomed_in(reference));
        // Past the slack factor it is.
        assert!(Camera::new(reference * ZOOMED_IN_SLACK * 1.01, Vec2::ZERO).is_zoomed_in(reference));
    }

    #[test]
    fn visible_world_rect_shrinks_when_zooming_in() {
        let screen = Size::new(800.0, 600.0);

        let far = Camera::new(1.0, Vec2::ZERO).visible_world_rect(screen);
        let near = Camera::new(4.0, Vec2::ZERO).visible_world_rect(screen);

        assert!((far.width() - 800.0).abs() < 1e-9);
        assert!((near.width() - 200.0).abs() < 1e-9);
        assert!(near.area() < far.area());
    }
}
