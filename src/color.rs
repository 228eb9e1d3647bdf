//! RGBA color values.

use std::ops::Mul;

use crate::util::clamp;

/// An unpremultiplied RGBA color with components in `0.0..=1.0`.
///
/// Construction does not clamp; the scaling operators do.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// The same color with a different alpha.
    #[inline]
    pub const fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    pub const TRANSPARENT_BLACK: Color = Color::new(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);
    pub const GREEN: Color = Color::new(0.0, 128.0 / 255.0, 0.0, 1.0);
    pub const LIME: Color = Color::new(0.0, 1.0, 0.0, 1.0);
    pub const BLUE: Color = Color::new(0.0, 0.0, 1.0, 1.0);
    pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0, 1.0);
    pub const CYAN: Color = Color::new(0.0, 1.0, 1.0, 1.0);
    pub const MAGENTA: Color = Color::new(1.0, 0.0, 1.0, 1.0);
    pub const GRAY: Color = Color::new(128.0 / 255.0, 128.0 / 255.0, 128.0 / 255.0, 1.0);
    pub const SILVER: Color = Color::new(192.0 / 255.0, 192.0 / 255.0, 192.0 / 255.0, 1.0);
    pub const MAROON: Color = Color::new(128.0 / 255.0, 0.0, 0.0, 1.0);
    pub const NAVY: Color = Color::new(0.0, 0.0, 128.0 / 255.0, 1.0);
    pub const OLIVE: Color = Color::new(128.0 / 255.0, 128.0 / 255.0, 0.0, 1.0);
    pub const PURPLE: Color = Color::new(128.0 / 255.0, 0.0, 128.0 / 255.0, 1.0);
    pub const TEAL: Color = Color::new(0.0, 128.0 / 255.0, 128.0 / 255.0, 1.0);
    pub const ORANGE: Color = Color::new(1.0, 165.0 / 255.0, 0.0, 1.0);
}

/// Scales all four components, clamping each to `0.0..=1.0`.
impl Mul<f64> for Color {
    type Output = Color;

    fn mul(self, rhs: f64) -> Color {
        Color {
            r: clamp(self.r * rhs, 0.0, 1.0),
            g: clamp(self.g * rhs, 0.0, 1.0),
            b: clamp(self.b * rhs, 0.0, 1.0),
            a: clamp(self.a * rhs, 0.0, 1.0),
        }
    }
}

impl Mul<Color> for f64 {
    type Output = Color;

    #[inline]
    fn mul(self, rhs: Color) -> Color {
        rhs * self
    }
}

/// One stop of a gradient brush; `offset` is in `0.0..=1.0`.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub offset: f64,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(offset: f64, color: Color) -> Self {
        Self { offset, color }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaling_clamps() {
        let c = Color::new(0.5, 0.25, 1.0, 1.0) * 2.0;
        assert_eq!(c, Color::new(1.0, 0.5, 1.0, 1.0));

        let c = 0.5 * Color::WHITE;
        assert_eq!(c, Color::new(0.5, 0.5, 0.5, 0.5));

        let c = Color::WHITE * -1.0;
        assert_eq!(c, Color::TRANSPARENT_BLACK);
    }

    #[test]
    fn with_alpha() {
        assert_eq!(Color::BLACK.with_alpha(0.5), Color::new(0.0, 0.0, 0.0, 0.5));
    }
}
