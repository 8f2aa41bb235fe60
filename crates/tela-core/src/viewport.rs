//! Viewport transform for pan and resize.

use kurbo::{Affine, Point, Vec2};
use serde::{Deserialize, Serialize};

/// Viewport transform over the canvas plane.
///
/// Wraps a 2D affine matrix whose coefficients follow the canvas
/// convention `[a, b, c, d, e, f]` =
/// `[scale_x, skew_y, skew_x, scale_y, translate_x, translate_y]`.
/// The transform starts as the identity and is mutated in place for
/// the lifetime of the owning canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    transform: Affine,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewport {
    /// Create a viewport with the identity transform.
    pub fn new() -> Self {
        Self {
            transform: Affine::IDENTITY,
        }
    }

    /// The current transform.
    pub fn transform(&self) -> Affine {
        self.transform
    }

    /// The six matrix coefficients in canvas order.
    pub fn coefficients(&self) -> [f64; 6] {
        self.transform.as_coeffs()
    }

    /// The translation components `(e, f)`.
    pub fn translation(&self) -> Vec2 {
        self.transform.translation()
    }

    /// Replace the transform wholesale.
    ///
    /// Any six numbers are accepted; no well-formedness validation is
    /// performed. A pure overwrite: setting the same matrix twice
    /// leaves state unchanged.
    pub fn set_transform(&mut self, transform: Affine) {
        self.transform = transform;
    }

    /// Pan so that `point` lands at the top-left corner of the visible
    /// viewport: translation becomes `(-point.x, -point.y)`, scale and
    /// skew untouched.
    pub fn absolute_pan(&mut self, point: Point) {
        let [a, b, c, d, _, _] = self.transform.as_coeffs();
        self.transform = Affine::new([a, b, c, d, -point.x, -point.y]);
    }

    /// Pan by a delta relative to the current translation.
    ///
    /// Derived through `absolute_pan` of the negated target; the net
    /// effect is additive: the new translation is
    /// `(e + delta.x, f + delta.y)`.
    pub fn relative_pan(&mut self, delta: Vec2) {
        let translation = self.translation();
        self.absolute_pan(Point::new(
            -delta.x - translation.x,
            -delta.y - translation.y,
        ));
    }
}
