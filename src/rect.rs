//! Axis-aligned rectangles.

use crate::float_eq::ApproxEqFixed;

/// An axis-aligned rectangle given by its two corners, in f64 coordinates.
///
/// No invariant is enforced between the corners; a rectangle with
/// `x1 < x0` or `y1 < y0` is simply empty.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Rect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Rect {
    #[inline]
    pub const fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    #[inline]
    pub const fn from_size(width: f64, height: f64) -> Self {
        Self {
            x0: 0.0,
            y0: 0.0,
            x1: width,
            y1: height,
        }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    /// Whether the rectangle has (approximately) no area.
    ///
    /// Uses the fixed-point granularity comparison, since a sliver thinner
    /// than what the backend can represent renders as nothing anyway.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width().approx_eq_fixed(0.0) || self.height().approx_eq_fixed(0.0)
    }

    #[inline]
    pub fn translate(&self, by: (f64, f64)) -> Self {
        Self {
            x0: self.x0 + by.0,
            y0: self.y0 + by.1,
            x1: self.x1 + by.0,
            y1: self.y1 + by.1,
        }
    }

    /// The smallest rectangle containing both `self` and `rect`.
    pub fn union(&self, rect: &Self) -> Self {
        Self {
            x0: self.x0.min(rect.x0),
            y0: self.y0.min(rect.y0),
            x1: self.x1.max(rect.x1),
            y1: self.y1.max(rect.y1),
        }
    }

    /// Grows the rectangle just enough to contain `x`, `y`.
    pub fn stretch_to(&self, x: f64, y: f64) -> Self {
        Self {
            x0: self.x0.min(x),
            y0: self.y0.min(y),
            x1: self.x1.max(x),
            y1: self.y1.max(y),
        }
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions() {
        let r = Rect::new(1.0, 2.0, 4.0, 8.0);
        assert_eq!(r.width(), 3.0);
        assert_eq!(r.height(), 6.0);
        assert!(!r.is_empty());

        assert!(Rect::from_size(0.0, 10.0).is_empty());
        assert!(Rect::from_size(10.0, 0.0).is_empty());
    }

    #[test]
    fn union_and_stretch() {
        let a = Rect::new(0.0, 0.0, 2.0, 2.0);
        let b = Rect::new(1.0, -1.0, 3.0, 1.0);

        assert_eq!(a.union(&b), Rect::new(0.0, -1.0, 3.0, 2.0));
        assert_eq!(a.stretch_to(5.0, 1.0), Rect::new(0.0, 0.0, 5.0, 2.0));
        assert_eq!(a.stretch_to(-1.0, -1.0), Rect::new(-1.0, -1.0, 2.0, 2.0));
    }

    #[test]
    fn translate_and_contains() {
        let r = Rect::new(0.0, 0.0, 2.0, 2.0).translate((10.0, 20.0));
        assert_eq!(r, Rect::new(10.0, 20.0, 12.0, 22.0));
        assert!(r.contains(11.0, 21.0));
        assert!(!r.contains(9.0, 21.0));
    }
}
