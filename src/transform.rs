//! 2D affine transforms.
//!
//! [`Transform`] is a 2x3 affine matrix in the row-vector convention used
//! by Cairo-style backends: a point is multiplied on the left, so in
//! `Transform::multiply(t1, t2)` the transform `t1` applies first.
//!
//! Validity (finiteness, invertibility) is never enforced at construction;
//! it is checked on demand by the path normalizer and by
//! [`ValidTransform::try_from`].

use std::ops::Deref;

use crate::error::InvalidTransform;
use crate::rect::Rect;
use crate::vector::{round_to_zero, Vector2d};

/// A transform that has been checked to be invertible.
///
/// Brush and render properties hand transforms to the backend, which may
/// not receive a singular matrix; this type is proof of that check.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct ValidTransform(Transform);

impl TryFrom<Transform> for ValidTransform {
    type Error = InvalidTransform;

    /// Validates a [`Transform`] before converting it to a [`ValidTransform`].
    ///
    /// A transform is valid if it is invertible.  For example, a
    /// matrix with all-zeros is not invertible, and it is invalid.
    fn try_from(t: Transform) -> Result<ValidTransform, InvalidTransform> {
        if t.is_invertible() {
            Ok(ValidTransform(t))
        } else {
            Err(InvalidTransform)
        }
    }
}

impl Deref for ValidTransform {
    type Target = Transform;

    fn deref(&self) -> &Transform {
        &self.0
    }
}

/// A 2D transformation matrix.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub xx: f64,
    pub yx: f64,
    pub xy: f64,
    pub yy: f64,
    pub x0: f64,
    pub y0: f64,
}

impl Transform {
    #[inline]
    pub const fn new_unchecked(xx: f64, yx: f64, xy: f64, yy: f64, x0: f64, y0: f64) -> Self {
        Self {
            xx,
            yx,
            xy,
            yy,
            x0,
            y0,
        }
    }

    #[inline]
    pub const fn identity() -> Self {
        Self::new_unchecked(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn new_translate(tx: f64, ty: f64) -> Self {
        Self::new_unchecked(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    #[inline]
    pub const fn new_scale(sx: f64, sy: f64) -> Self {
        Self::new_unchecked(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// A rotation by `radians`, counterclockwise on a y-down screen.
    ///
    /// Sine and cosine values within 100 machine epsilons of zero are
    /// snapped to zero, so quarter-turn rotations come out exact.
    #[inline]
    pub fn new_rotate(radians: f64) -> Self {
        let (s, c) = radians.sin_cos();
        let s = round_to_zero(s);
        let c = round_to_zero(c);
        Self::new_unchecked(c, -s, s, c, 0.0, 0.0)
    }

    #[inline]
    pub const fn new_shear_x(factor: f64) -> Self {
        Self::new_unchecked(1.0, 0.0, factor, 1.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn new_shear_y(factor: f64) -> Self {
        Self::new_unchecked(1.0, factor, 0.0, 1.0, 0.0, 0.0)
    }

    /// Composes two transforms; `t1` applies to points first, then `t2`.
    #[must_use]
    pub fn multiply(t1: &Transform, t2: &Transform) -> Self {
        #[allow(clippy::suspicious_operation_groupings)]
        Transform {
            xx: t1.xx * t2.xx + t1.yx * t2.xy,
            yx: t1.xx * t2.yx + t1.yx * t2.yy,
            xy: t1.xy * t2.xx + t1.yy * t2.xy,
            yy: t1.xy * t2.yx + t1.yy * t2.yy,
            x0: t1.x0 * t2.xx + t1.y0 * t2.xy + t2.x0,
            y0: t1.x0 * t2.yx + t1.y0 * t2.yy + t2.y0,
        }
    }

    #[inline]
    pub fn pre_transform(&self, t: &Transform) -> Self {
        Self::multiply(t, self)
    }

    #[inline]
    pub fn post_transform(&self, t: &Transform) -> Self {
        Self::multiply(self, t)
    }

    #[inline]
    pub fn pre_translate(&self, x: f64, y: f64) -> Self {
        self.pre_transform(&Transform::new_translate(x, y))
    }

    #[inline]
    pub fn pre_scale(&self, sx: f64, sy: f64) -> Self {
        self.pre_transform(&Transform::new_scale(sx, sy))
    }

    #[inline]
    pub fn pre_rotate(&self, radians: f64) -> Self {
        self.pre_transform(&Transform::new_rotate(radians))
    }

    #[inline]
    pub fn post_translate(&self, x: f64, y: f64) -> Self {
        self.post_transform(&Transform::new_translate(x, y))
    }

    #[inline]
    pub fn post_scale(&self, sx: f64, sy: f64) -> Self {
        self.post_transform(&Transform::new_scale(sx, sy))
    }

    #[inline]
    pub fn post_rotate(&self, radians: f64) -> Self {
        self.post_transform(&Transform::new_rotate(radians))
    }

    #[inline]
    pub fn determinant(&self) -> f64 {
        self.xx * self.yy - self.xy * self.yx
    }

    /// Whether the determinant is exactly nonzero.
    ///
    /// Exact comparison against 0.0, no epsilon; callers that want a
    /// tolerance must apply their own first.
    #[inline]
    pub fn is_invertible(&self) -> bool {
        self.determinant() != 0.0
    }

    /// Whether no coefficient is NaN or infinite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.xx.is_finite()
            && self.yx.is_finite()
            && self.xy.is_finite()
            && self.yy.is_finite()
            && self.x0.is_finite()
            && self.y0.is_finite()
    }

    /// The inverse transform, or `None` if the determinant is zero or
    /// not finite.
    #[must_use]
    pub fn invert(&self) -> Option<Self> {
        let det = self.determinant();

        if det == 0.0 || !det.is_finite() {
            return None;
        }

        let inv_det = 1.0 / det;

        Some(Transform::new_unchecked(
            inv_det * self.yy,
            inv_det * (-self.yx),
            inv_det * (-self.xy),
            inv_det * self.xx,
            inv_det * (self.xy * self.y0 - self.yy * self.x0),
            inv_det * (self.yx * self.x0 - self.xx * self.y0),
        ))
    }

    /// Applies only the linear part of the transform, ignoring translation.
    #[inline]
    pub fn transform_distance(&self, d: Vector2d) -> Vector2d {
        Vector2d::new(d.x * self.xx + d.y * self.xy, d.x * self.yx + d.y * self.yy)
    }

    /// Applies the full transform to a point.
    ///
    /// Result components within 100 machine epsilons of zero are snapped
    /// to a signed zero, preserving the sign for downstream angle
    /// computations.
    #[inline]
    pub fn transform_point(&self, pt: Vector2d) -> Vector2d {
        let d = self.transform_distance(pt);
        Vector2d::new(round_to_zero(d.x + self.x0), round_to_zero(d.y + self.y0))
    }

    /// The axis-aligned bounding box of the four transformed corners.
    pub fn transform_rect(&self, rect: &Rect) -> Rect {
        let points = [
            self.transform_point(Vector2d::new(rect.x0, rect.y0)),
            self.transform_point(Vector2d::new(rect.x1, rect.y0)),
            self.transform_point(Vector2d::new(rect.x0, rect.y1)),
            self.transform_point(Vector2d::new(rect.x1, rect.y1)),
        ];

        let (mut xmin, mut ymin, mut xmax, mut ymax) = {
            let p = points[0];

            (p.x, p.y, p.x, p.y)
        };

        for &p in points.iter().skip(1) {
            if p.x < xmin {
                xmin = p.x;
            }

            if p.x > xmax {
                xmax = p.x;
            }

            if p.y < ymin {
                ymin = p.y;
            }

            if p.y > ymax {
                ymax = p.y;
            }
        }

        Rect {
            x0: xmin,
            y0: ymin,
            x1: xmax,
            y1: ymax,
        }
    }
}

impl Default for Transform {
    #[inline]
    fn default() -> Transform {
        Transform::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::ApproxEq;
    use proptest::prelude::*;
    use std::f64::consts::FRAC_PI_2;

    fn assert_transform_eq(t1: &Transform, t2: &Transform) {
        let epsilon = 8.0 * f64::EPSILON; // kind of arbitrary, but allow for some sloppiness

        assert!(t1.xx.approx_eq(t2.xx, (epsilon, 1)));
        assert!(t1.yx.approx_eq(t2.yx, (epsilon, 1)));
        assert!(t1.xy.approx_eq(t2.xy, (epsilon, 1)));
        assert!(t1.yy.approx_eq(t2.yy, (epsilon, 1)));
        assert!(t1.x0.approx_eq(t2.x0, (epsilon, 1)));
        assert!(t1.y0.approx_eq(t2.y0, (epsilon, 1)));
    }

    #[test]
    fn test_multiply() {
        let t1 = Transform::identity();
        let t2 = Transform::new_unchecked(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        assert_transform_eq(&Transform::multiply(&t1, &t2), &t2);
        assert_transform_eq(&Transform::multiply(&t2, &t1), &t2);

        let t1 = Transform::new_unchecked(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        let t2 = Transform::new_unchecked(0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
        let r = Transform::new_unchecked(0.0, 0.0, 0.0, 0.0, 5.0, 6.0);
        assert_transform_eq(&Transform::multiply(&t1, &t2), &t2);
        assert_transform_eq(&Transform::multiply(&t2, &t1), &r);

        let t1 = Transform::new_unchecked(0.5, 0.0, 0.0, 0.5, 10.0, 10.0);
        let t2 = Transform::new_unchecked(1.0, 0.0, 0.0, 1.0, -10.0, -10.0);
        let r1 = Transform::new_unchecked(0.5, 0.0, 0.0, 0.5, 0.0, 0.0);
        let r2 = Transform::new_unchecked(0.5, 0.0, 0.0, 0.5, 5.0, 5.0);
        assert_transform_eq(&Transform::multiply(&t1, &t2), &r1);
        assert_transform_eq(&Transform::multiply(&t2, &t1), &r2);
    }

    #[test]
    fn test_invert() {
        let t = Transform::new_unchecked(2.0, 0.0, 0.0, 0.0, 0.0, 0.0);
        assert!(!t.is_invertible());
        assert!(t.invert().is_none());

        let t = Transform::identity();
        assert!(t.is_invertible());
        let i = t.invert().unwrap();
        assert_transform_eq(&i, &Transform::identity());

        let t = Transform::new_unchecked(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        assert!(t.is_invertible());
        let i = t.invert().unwrap();
        assert_transform_eq(&t.pre_transform(&i), &Transform::identity());
        assert_transform_eq(&t.post_transform(&i), &Transform::identity());
    }

    #[test]
    fn finiteness() {
        assert!(Transform::identity().is_finite());
        assert!(!Transform::new_unchecked(f64::NAN, 0.0, 0.0, 1.0, 0.0, 0.0).is_finite());
        assert!(!Transform::new_unchecked(1.0, 0.0, 0.0, 1.0, f64::INFINITY, 0.0).is_finite());
        assert!(!Transform::new_unchecked(1.0, 0.0, 0.0, 1.0, 0.0, f64::NEG_INFINITY).is_finite());
    }

    #[test]
    fn test_transform_point() {
        let t = Transform::new_translate(10.0, 10.0);
        assert_eq!(
            Vector2d::new(11.0, 11.0),
            t.transform_point(Vector2d::new(1.0, 1.0))
        );
    }

    #[test]
    fn test_transform_distance() {
        let t = Transform::new_translate(10.0, 10.0).pre_scale(2.0, 1.0);
        assert_eq!(
            Vector2d::new(2.0, 1.0),
            t.transform_distance(Vector2d::new(1.0, 1.0))
        );
    }

    #[test]
    fn transform_point_snaps_to_signed_zero() {
        let t = Transform::new_rotate(FRAC_PI_2);
        let p = t.transform_point(Vector2d::new(1.0, 0.0));
        assert_eq!(p, Vector2d::new(0.0, -1.0));

        let q = t.transform_point(Vector2d::new(-1.0, 0.0));
        assert_eq!(q.x, 0.0);
        assert_eq!(q.y, 1.0);
    }

    #[test]
    fn rotation_makes_quarter_turns_exact() {
        let t = Transform::new_rotate(FRAC_PI_2);
        assert_eq!(t.xx, 0.0);
        assert_eq!(t.yy, 0.0);
        assert_eq!(t.yx, -1.0);
        assert_eq!(t.xy, 1.0);
    }

    #[test]
    fn test_transform_rect() {
        let r = Rect::new(1.0, 2.0, 3.0, 4.0);

        let t = Transform::identity();
        assert_eq!(t.transform_rect(&r), r);

        let t = Transform::new_translate(10.0, 10.0);
        assert_eq!(t.transform_rect(&r), Rect::new(11.0, 12.0, 13.0, 14.0));

        let t = Transform::new_scale(-1.0, 1.0);
        assert_eq!(t.transform_rect(&r), Rect::new(-3.0, 2.0, -1.0, 4.0));
    }

    #[test]
    fn valid_transform_rejects_singular() {
        let singular = Transform::new_scale(1.0, 0.0);
        assert!(ValidTransform::try_from(singular).is_err());

        let ok = ValidTransform::try_from(Transform::identity()).unwrap();
        assert_eq!(*ok, Transform::identity());
    }

    prop_compose! {
        fn arbitrary_transform()(
            xx in -1.0e2..1.0e2f64,
            yx in -1.0e2..1.0e2f64,
            xy in -1.0e2..1.0e2f64,
            yy in -1.0e2..1.0e2f64,
            x0 in -1.0e2..1.0e2f64,
            y0 in -1.0e2..1.0e2f64,
        ) -> Transform {
            Transform::new_unchecked(xx, yx, xy, yy, x0, y0)
        }
    }

    proptest! {
        #[test]
        fn invert_round_trip(t in arbitrary_transform()) {
            // Exact zero is the only rejection criterion, but round-tripping
            // through a badly conditioned inverse loses too much precision
            // to assert against, so stay away from nearly-singular matrices.
            prop_assume!(t.determinant().abs() > 1.0);

            let double_inverse = t.invert().unwrap().invert().unwrap();
            let epsilon = 1.0e-6;

            prop_assert!(t.xx.approx_eq(double_inverse.xx, (epsilon, 4)));
            prop_assert!(t.yx.approx_eq(double_inverse.yx, (epsilon, 4)));
            prop_assert!(t.xy.approx_eq(double_inverse.xy, (epsilon, 4)));
            prop_assert!(t.yy.approx_eq(double_inverse.yy, (epsilon, 4)));
            prop_assert!(t.x0.approx_eq(double_inverse.x0, (epsilon, 4)));
            prop_assert!(t.y0.approx_eq(double_inverse.y0, (epsilon, 4)));
        }

        #[test]
        fn composition_applies_left_transform_first(
            a in arbitrary_transform(),
            b in arbitrary_transform(),
            x in -100.0..100.0f64,
            y in -100.0..100.0f64,
        ) {
            let p = Vector2d::new(x, y);
            let composed = Transform::multiply(&a, &b).transform_point(p);
            let stepwise = b.transform_point(a.transform_point(p));

            prop_assert!(composed.x.approx_eq(stepwise.x, (1.0e-6, 4)));
            prop_assert!(composed.y.approx_eq(stepwise.y, (1.0e-6, 4)));
        }
    }
}
