//! Two-dimensional vectors and angle helpers.

use std::f64::consts::PI;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// A 2D vector, also used for points.
///
/// Coordinates follow the usual screen convention: x grows to the right,
/// y grows downward.  Components may be NaN or infinite; validity is the
/// concern of [`crate::Transform::is_finite`] and friends, not of this type.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Vector2d {
    pub x: f64,
    pub y: f64,
}

impl Vector2d {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    #[inline]
    pub fn dot(self, other: Vector2d) -> f64 {
        self.x * other.x + self.y * other.y
    }

    #[inline]
    pub fn magnitude_squared(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    pub fn magnitude(self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// The vector scaled to unit length.
    pub fn to_unit(self) -> Vector2d {
        let len = self.magnitude();
        Vector2d::new(self.x / len, self.y / len)
    }

    /// The angle of the vector in radians, normalized to `[0, 2π)`.
    ///
    /// Inverse of [`point_for_angle`]: for a non-degenerate vector `v`,
    /// `point_for_angle(v.angular_direction(), v.magnitude())` points the
    /// same way as `v`.
    pub fn angular_direction(self) -> f64 {
        let angle = self.y.atan2(self.x);
        if angle < 0.0 {
            angle + PI * 2.0
        } else {
            angle
        }
    }
}

impl Add for Vector2d {
    type Output = Vector2d;

    #[inline]
    fn add(self, rhs: Vector2d) -> Vector2d {
        Vector2d::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector2d {
    #[inline]
    fn add_assign(&mut self, rhs: Vector2d) {
        *self = *self + rhs;
    }
}

impl Sub for Vector2d {
    type Output = Vector2d;

    #[inline]
    fn sub(self, rhs: Vector2d) -> Vector2d {
        Vector2d::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vector2d {
    #[inline]
    fn sub_assign(&mut self, rhs: Vector2d) {
        *self = *self - rhs;
    }
}

impl Neg for Vector2d {
    type Output = Vector2d;

    #[inline]
    fn neg(self) -> Vector2d {
        Vector2d::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Vector2d {
    type Output = Vector2d;

    #[inline]
    fn mul(self, rhs: f64) -> Vector2d {
        Vector2d::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Vector2d> for f64 {
    type Output = Vector2d;

    #[inline]
    fn mul(self, rhs: Vector2d) -> Vector2d {
        rhs * self
    }
}

/// Component-wise product.
impl Mul<Vector2d> for Vector2d {
    type Output = Vector2d;

    #[inline]
    fn mul(self, rhs: Vector2d) -> Vector2d {
        Vector2d::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl Div<f64> for Vector2d {
    type Output = Vector2d;

    #[inline]
    fn div(self, rhs: f64) -> Vector2d {
        Vector2d::new(self.x / rhs, self.y / rhs)
    }
}

/// Component-wise quotient.
impl Div<Vector2d> for Vector2d {
    type Output = Vector2d;

    #[inline]
    fn div(self, rhs: Vector2d) -> Vector2d {
        Vector2d::new(self.x / rhs.x, self.y / rhs.y)
    }
}

/// Snaps a value within 100 machine epsilons of zero to a signed zero.
///
/// Rotations produce values like `sin(π)` that should be exactly zero but
/// are not; leaving them as tiny non-zero values breaks downstream angle
/// computations that depend on the sign of zero.
pub(crate) fn round_to_zero(val: f64) -> f64 {
    if val.abs() < f64::EPSILON * 100.0 {
        if val < 0.0 {
            -0.0
        } else {
            0.0
        }
    } else {
        val
    }
}

/// The point at `angle` radians on a circle of radius `magnitude`
/// centered on the origin.
pub fn point_for_angle(angle: f64, magnitude: f64) -> Vector2d {
    Vector2d::new(
        round_to_zero(angle.cos() * magnitude),
        round_to_zero(angle.sin() * magnitude),
    )
}

/// The angle in `[0, 2π)` at which `pt` sits on the circle centered on `center`.
pub fn angle_for_point(center: Vector2d, pt: Vector2d) -> f64 {
    (pt - center).angular_direction()
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn arithmetic() {
        let a = Vector2d::new(1.0, 2.0);
        let b = Vector2d::new(3.0, -4.0);

        assert_eq!(a + b, Vector2d::new(4.0, -2.0));
        assert_eq!(a - b, Vector2d::new(-2.0, 6.0));
        assert_eq!(-a, Vector2d::new(-1.0, -2.0));
        assert_eq!(a * 2.0, Vector2d::new(2.0, 4.0));
        assert_eq!(2.0 * a, Vector2d::new(2.0, 4.0));
        assert_eq!(a * b, Vector2d::new(3.0, -8.0));
        assert_eq!(b / 2.0, Vector2d::new(1.5, -2.0));
        assert_eq!(b / a, Vector2d::new(3.0, -2.0));
    }

    #[test]
    fn dot_and_magnitude() {
        let a = Vector2d::new(3.0, 4.0);
        assert_eq!(a.dot(a), 25.0);
        assert_eq!(a.magnitude_squared(), 25.0);
        assert_eq!(a.magnitude(), 5.0);

        let u = a.to_unit();
        assert!(approx_eq!(f64, u.magnitude(), 1.0, epsilon = 1e-12));
    }

    #[test]
    fn angular_direction_is_normalized() {
        assert_eq!(Vector2d::new(1.0, 0.0).angular_direction(), 0.0);
        assert!(approx_eq!(
            f64,
            Vector2d::new(0.0, 1.0).angular_direction(),
            FRAC_PI_2,
            epsilon = 1e-12
        ));
        assert!(approx_eq!(
            f64,
            Vector2d::new(0.0, -1.0).angular_direction(),
            3.0 * FRAC_PI_2,
            epsilon = 1e-12
        ));
    }

    #[test]
    fn point_for_angle_snaps_to_zero() {
        let p = point_for_angle(PI, 1.0);
        assert_eq!(p, Vector2d::new(-1.0, 0.0));
        // sin(π) is not exactly zero in floating point; the snap makes it so.
        assert_eq!(p.y, 0.0);

        let q = point_for_angle(FRAC_PI_2, 2.0);
        assert_eq!(q, Vector2d::new(0.0, 2.0));
    }

    #[test]
    fn angle_point_round_trip() {
        let center = Vector2d::new(10.0, 20.0);
        for &angle in &[0.0, 0.5, 1.0, 2.5, 4.0, 6.0] {
            let pt = center + point_for_angle(angle, 5.0);
            assert!(approx_eq!(
                f64,
                angle_for_point(center, pt),
                angle,
                epsilon = 1e-12
            ));
        }
    }
}
