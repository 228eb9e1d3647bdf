//! Lowering of recorded path commands to backend-ready form.
//!
//! A recorded command sequence may contain relative coordinates, quadratic
//! curves, arcs, and mid-path transform and origin changes.  Rendering
//! backends understand none of that; they take absolute moves, lines, cubic
//! Béziers, and closes.  This module walks a command slice with a
//! [`NormalizeContext`] holding the in-flight state and emits the lowered
//! [`PathSegment`] sequence.
//!
//! Points are resolved against the active transform about the movable
//! origin: `emitted = m.transform_point(p - origin) + origin`.  The cursor
//! (`current_point`) stays in untransformed coordinates; the close point is
//! kept in emitted coordinates, which is why resolving a `ClosePath` needs
//! the inverse of the active matrix.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::draw2d_log;
use crate::error::Error;
use crate::path_builder::{ArcSegment, CubicBezierCurve, PathCommand};
use crate::transform::Transform;
use crate::vector::{point_for_angle, round_to_zero, Vector2d};

/// Arcs sweeping less than this are discarded as degenerate.
const ARC_DEGENERACY_LIMIT: f64 = PI / 180_000.0;

/// A single lowered path instruction.
///
/// This is the only vocabulary the rendering boundary ever sees.  The
/// `ClosePath` payload is the point the close returns to; the normalizer
/// always follows a close with a `MoveTo` to the same point, re-opening the
/// subpath there.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathSegment {
    MoveTo(Vector2d),
    LineTo(Vector2d),
    CurveTo(CubicBezierCurve),
    ClosePath(Vector2d),
}

/// In-flight state of one normalization pass.
///
/// Created fresh per pass and discarded at the end; nothing carries over
/// between passes.
#[derive(Debug, Copy, Clone, PartialEq)]
struct NormalizeContext {
    transform: Transform,
    origin: Vector2d,
    current_point: Vector2d,
    close_point: Vector2d,
}

impl Default for NormalizeContext {
    fn default() -> NormalizeContext {
        NormalizeContext {
            transform: Transform::identity(),
            origin: Vector2d::zero(),
            current_point: Vector2d::zero(),
            close_point: Vector2d::zero(),
        }
    }
}

/// Lowers `commands`, failing on the first error.
///
/// On error the partially lowered output is discarded; use
/// [`normalize_partial`] to keep it.
pub fn normalize(commands: &[PathCommand]) -> Result<Vec<PathSegment>, Error> {
    let mut segments = Vec::new();
    let mut ctx = NormalizeContext::default();

    for cmd in commands {
        ctx.lower(cmd, &mut segments)?;
    }

    Ok(segments)
}

/// Lowers `commands`, stopping at the first error but keeping the segments
/// lowered so far.
pub fn normalize_partial(commands: &[PathCommand]) -> (Vec<PathSegment>, Option<Error>) {
    let mut segments = Vec::new();
    let mut ctx = NormalizeContext::default();

    for cmd in commands {
        if let Err(e) = ctx.lower(cmd, &mut segments) {
            draw2d_log!("normalization stopped after {} segments: {}", segments.len(), e);
            return (segments, Some(e));
        }
    }

    (segments, None)
}

impl NormalizeContext {
    /// Resolves an untransformed point to emitted coordinates.
    fn resolve(&self, p: Vector2d) -> Vector2d {
        self.transform.transform_point(p - self.origin) + self.origin
    }

    fn lower(&mut self, cmd: &PathCommand, segments: &mut Vec<PathSegment>) -> Result<(), Error> {
        match *cmd {
            PathCommand::MoveTo(pt) => {
                self.current_point = pt;
                let emitted = self.resolve(pt);
                segments.push(PathSegment::MoveTo(emitted));
                self.close_point = emitted;
            }

            PathCommand::RelMoveTo(delta) => {
                self.current_point += delta;
                let emitted = self.resolve(self.current_point);
                segments.push(PathSegment::MoveTo(emitted));
                self.close_point = emitted;
            }

            PathCommand::ClosePath(_) => {
                // The close target is stored in emitted coordinates, so
                // mapping it back to the cursor needs the inverse of the
                // active matrix.  Check validity before emitting anything,
                // so a failure leaves the output untouched.
                if !self.transform.is_finite() {
                    return Err(Error::InvalidMatrix);
                }
                let inverse = self.transform.invert().ok_or(Error::InvalidMatrix)?;

                segments.push(PathSegment::ClosePath(self.close_point));
                segments.push(PathSegment::MoveTo(self.close_point));

                self.current_point =
                    inverse.transform_point(self.close_point - self.origin) + self.origin;
            }

            PathCommand::LineTo(pt) => {
                self.current_point = pt;
                segments.push(PathSegment::LineTo(self.resolve(pt)));
            }

            PathCommand::RelLineTo(delta) => {
                self.current_point += delta;
                segments.push(PathSegment::LineTo(self.resolve(self.current_point)));
            }

            PathCommand::CurveTo(ref c) => {
                let curve = CubicBezierCurve {
                    pt1: self.resolve(c.pt1),
                    pt2: self.resolve(c.pt2),
                    to: self.resolve(c.to),
                };
                segments.push(PathSegment::CurveTo(curve));
                self.current_point = c.to;
            }

            PathCommand::RelCurveTo(ref c) => {
                let curve = CubicBezierCurve {
                    pt1: self.resolve(self.current_point + c.pt1),
                    pt2: self.resolve(self.current_point + c.pt2),
                    to: self.resolve(self.current_point + c.to),
                };
                segments.push(PathSegment::CurveTo(curve));
                self.current_point += c.to;
            }

            PathCommand::QuadTo(ref q) => {
                let curve = self.raise_quad(q.ctrl, q.to);
                segments.push(PathSegment::CurveTo(curve));
                self.current_point = q.to;
            }

            PathCommand::RelQuadTo(ref q) => {
                let ctrl = self.current_point + q.ctrl;
                let to = self.current_point + q.to;
                let curve = self.raise_quad(ctrl, to);
                segments.push(PathSegment::CurveTo(curve));
                self.current_point = to;
            }

            PathCommand::Arc(ref a) => {
                self.lower_arc(a, segments);
            }

            PathCommand::SetTransform(t) => {
                // Validity of the outgoing matrix is what is checked, not
                // the incoming one; a bad matrix is caught when the path
                // next depends on it.
                if !self.transform.is_finite() || !self.transform.is_invertible() {
                    return Err(Error::InvalidMatrix);
                }
                self.transform = t;
            }

            PathCommand::SetOrigin(origin) => {
                self.origin = origin;
            }
        }

        Ok(())
    }

    /// Raises a quadratic curve to cubic form, in emitted coordinates.
    fn raise_quad(&self, ctrl: Vector2d, to: Vector2d) -> CubicBezierCurve {
        let begin = self.resolve(self.current_point);
        let ctrl = self.resolve(ctrl);
        let end = self.resolve(to);

        CubicBezierCurve {
            pt1: begin + (ctrl - begin) * (2.0 / 3.0),
            pt2: end + (ctrl - end) * (2.0 / 3.0),
            to: end,
        }
    }

    /// Subdivides an arc sweep into cubic Bézier segments and emits them.
    ///
    /// The sweep is halved until each piece spans at most a quarter turn,
    /// then each piece is emitted from the canonical unit-circle control
    /// points, rotated into place and mapped through the radius-scaled
    /// transform.
    fn lower_arc(&mut self, arc: &ArcSegment, segments: &mut Vec<PathSegment>) {
        if arc.rotation.abs() < ARC_DEGENERACY_LIMIT {
            draw2d_log!("discarding degenerate arc (sweep {})", arc.rotation);
            return;
        }

        let counterclockwise = arc.rotation > 0.0;

        let saved_transform = self.transform;
        let saved_origin = self.origin;

        // The radius scale applies before the active matrix, so circles
        // recorded in unit form come out as ellipses of the right size.
        let scaled = self
            .transform
            .pre_transform(&Transform::new_scale(arc.radius.x, arc.radius.y));

        let center =
            self.current_point - point_for_angle(2.0 * PI - arc.start_angle, 1.0) * arc.radius;
        self.origin = center;

        let mut theta = arc.rotation;
        let mut segment_count = 1u32;
        while theta.abs() > FRAC_PI_2 {
            theta /= 2.0;
            segment_count *= 2;
        }

        // Canonical control points for a sweep of 2φ centered on angle
        // zero, on the unit circle.
        let phi = theta / 2.0;
        let (sin_phi, cos_phi) = phi.abs().sin_cos();

        let mut pt0 = Vector2d::new(cos_phi, -sin_phi);
        let mut pt1 = Vector2d::new(
            (4.0 - cos_phi) / 3.0,
            -((1.0 - cos_phi) * (3.0 - cos_phi)) / (3.0 * sin_phi),
        );
        let mut pt2 = Vector2d::new(pt1.x, -pt1.y);
        let mut pt3 = Vector2d::new(cos_phi, sin_phi);

        // Shift each piece so it starts at relative angle zero and ends at
        // relative angle -θ; reversing the order flips the direction.
        pt0 = rotate(pt0, -phi);
        pt1 = rotate(pt1, -phi);
        pt2 = rotate(pt2, -phi);
        pt3 = rotate(pt3, -phi);
        if counterclockwise {
            std::mem::swap(&mut pt0, &mut pt3);
            std::mem::swap(&mut pt1, &mut pt2);
        }

        let mut curr_theta = 2.0 * PI - arc.start_angle;

        for _ in 0..segment_count {
            let cpt1 = center + scaled.transform_point(rotate(pt1, curr_theta));
            let cpt2 = center + scaled.transform_point(rotate(pt2, curr_theta));
            let cpt3 = center + scaled.transform_point(rotate(pt3, curr_theta));

            segments.push(PathSegment::CurveTo(CubicBezierCurve {
                pt1: cpt1,
                pt2: cpt2,
                to: cpt3,
            }));

            self.current_point = cpt3;
            curr_theta -= theta;
        }

        self.transform = saved_transform;
        self.origin = saved_origin;
    }
}

/// Rotates a point about the origin, snapping near-zero components.
fn rotate(pt: Vector2d, radians: f64) -> Vector2d {
    let (sin, cos) = radians.sin_cos();
    Vector2d::new(
        round_to_zero(pt.x * cos - pt.y * sin),
        round_to_zero(pt.x * sin + pt.y * cos),
    )
}
