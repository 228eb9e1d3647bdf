//! Recording of Bézier paths.
//!
//! Path data is recorded and edited far more often than it is rendered, so
//! this module splits the two concerns:
//!
//! * Drawing code pushes commands into a [`PathBuilder`].  This is a mutable,
//!   temporary container; commands are stored verbatim, with relative
//!   coordinates, arcs, and transform changes unresolved.
//!
//! * The [`PathBuilder`] then gets turned into a long-term, immutable
//!   [`Path`] with a more compact representation.  This is the point where
//!   the normalization pipeline in [`crate::path_normalizer`] runs and every
//!   command is lowered to an absolute move/line/cubic/close instruction.
//!
//! The builder uses a [`TinyVec`] with space for 32 commands on the stack;
//! most paths have fewer, and larger ones spill to the heap.

use tinyvec::TinyVec;

use std::f64::consts::PI;
use std::ops::{Index, IndexMut};
use std::slice;

use crate::error::Error;
use crate::path_normalizer::{normalize, PathSegment};
use crate::rect::Rect;
use crate::transform::Transform;
use crate::vector::Vector2d;

/// Describes a cubic Bézier segment.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct CubicBezierCurve {
    /// The first control point.
    pub pt1: Vector2d,
    /// The second control point.
    pub pt2: Vector2d,
    /// The end point of this path segment.
    pub to: Vector2d,
}

impl CubicBezierCurve {
    /// Consumes 6 coordinates and creates a curve segment.
    fn from_coords(coords: &mut slice::Iter<'_, f64>) -> CubicBezierCurve {
        let pt1 = take_point(coords);
        let pt2 = take_point(coords);
        let to = take_point(coords);

        CubicBezierCurve { pt1, pt2, to }
    }

    /// Pushes 6 coordinates to `coords` and returns `PackedSegment::CurveTo`.
    fn to_packed_and_coords(&self, coords: &mut Vec<f64>) -> PackedSegment {
        coords.push(self.pt1.x);
        coords.push(self.pt1.y);
        coords.push(self.pt2.x);
        coords.push(self.pt2.y);
        coords.push(self.to.x);
        coords.push(self.to.y);
        PackedSegment::CurveTo
    }
}

/// Describes a quadratic Bézier segment.
///
/// The normalizer raises these to cubic form; they never survive into a
/// [`Path`].
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct QuadraticBezierCurve {
    /// The control point.
    pub ctrl: Vector2d,
    /// The end point of this path segment.
    pub to: Vector2d,
}

/// Describes a circular or elliptical arc sweep.
///
/// The arc starts at the current point, which sits at `start_angle` on the
/// ellipse; `rotation` is the signed sweep in radians, negative meaning
/// clockwise.  The center is derived from the current point, not stored.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct ArcSegment {
    /// The x and y radii of the ellipse.
    pub radius: Vector2d,
    /// The signed sweep angle in radians.
    pub rotation: f64,
    /// The angle on the ellipse at which the arc begins.
    pub start_angle: f64,
}

/// A single recorded path command, exactly as pushed by the builder.
///
/// Pure data; nothing is validated or resolved at recording time.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathCommand {
    /// Begins a new subpath at an absolute point.
    MoveTo(Vector2d),
    /// Begins a new subpath at an offset from the current point.
    RelMoveTo(Vector2d),
    /// Closes the current subpath.  The payload is the close target; it is
    /// zero in builder-recorded commands, and the normalizer supplies the
    /// actual target when lowering.
    ClosePath(Vector2d),
    LineTo(Vector2d),
    RelLineTo(Vector2d),
    CurveTo(CubicBezierCurve),
    /// A cubic curve with all three points relative to the current point.
    RelCurveTo(CubicBezierCurve),
    QuadTo(QuadraticBezierCurve),
    RelQuadTo(QuadraticBezierCurve),
    Arc(ArcSegment),
    /// Replaces the transform applied to subsequent commands.
    SetTransform(Transform),
    /// Moves the origin about which subsequent transforms apply.
    SetOrigin(Vector2d),
}

// This is just so we can use TinyVec, whose type parameter requires
// T: Default.  There is no natural default for a path command; this is just
// our implementation detail.
impl Default for PathCommand {
    fn default() -> PathCommand {
        PathCommand::ClosePath(Vector2d::zero())
    }
}

/// Records commands that later make up a path.
///
/// Create this with [`PathBuilder::new`], push commands into it, and turn it
/// into an immutable [`Path`] with [`PathBuilder::to_path`].  The builder is
/// also an ordered container: commands can be inspected, inserted, and
/// removed freely before the path is materialized.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathBuilder {
    commands: TinyVec<[PathCommand; 32]>,
    transform: Transform,
    origin: Vector2d,
}

impl PathBuilder {
    pub fn new() -> PathBuilder {
        PathBuilder::default()
    }

    /// Normalizes the recorded commands into an immutable [`Path`].
    ///
    /// This is atomic: on error no `Path` is produced and the builder is
    /// unchanged.
    pub fn to_path(&self) -> Result<Path, Error> {
        let segments = normalize(&self.commands)?;
        Ok(Path::from_segments(&segments))
    }

    /// Computes the bounding box of the normalized path.
    ///
    /// The box is the hull of emitted end points and curve control points,
    /// not a tight bound on the curves themselves.  Returns `None` if the
    /// path emits nothing.
    pub fn path_extents(&self) -> Result<Option<Rect>, Error> {
        let segments = normalize(&self.commands)?;

        let mut extents: Option<Rect> = None;

        let mut stretch = |pt: Vector2d| {
            extents = Some(match extents {
                None => Rect::new(pt.x, pt.y, pt.x, pt.y),
                Some(r) => r.stretch_to(pt.x, pt.y),
            });
        };

        for segment in &segments {
            match *segment {
                PathSegment::MoveTo(pt)
                | PathSegment::LineTo(pt)
                | PathSegment::ClosePath(pt) => stretch(pt),

                PathSegment::CurveTo(ref c) => {
                    stretch(c.pt1);
                    stretch(c.pt2);
                    stretch(c.to);
                }
            }
        }

        Ok(extents)
    }

    /// Adds a MoveTo command to the path.
    pub fn move_to(&mut self, pt: Vector2d) {
        self.commands.push(PathCommand::MoveTo(pt));
    }

    /// Adds a RelMoveTo command to the path.
    pub fn rel_move_to(&mut self, delta: Vector2d) {
        self.commands.push(PathCommand::RelMoveTo(delta));
    }

    /// Adds a ClosePath command to the path.
    pub fn close_path(&mut self) {
        self.commands.push(PathCommand::ClosePath(Vector2d::zero()));
    }

    /// Adds a LineTo command to the path.
    pub fn line_to(&mut self, pt: Vector2d) {
        self.commands.push(PathCommand::LineTo(pt));
    }

    /// Adds a RelLineTo command to the path.
    pub fn rel_line_to(&mut self, delta: Vector2d) {
        self.commands.push(PathCommand::RelLineTo(delta));
    }

    /// Adds a CurveTo command to the path.
    pub fn curve_to(&mut self, pt1: Vector2d, pt2: Vector2d, to: Vector2d) {
        self.commands
            .push(PathCommand::CurveTo(CubicBezierCurve { pt1, pt2, to }));
    }

    /// Adds a RelCurveTo command to the path.
    pub fn rel_curve_to(&mut self, pt1: Vector2d, pt2: Vector2d, to: Vector2d) {
        self.commands
            .push(PathCommand::RelCurveTo(CubicBezierCurve { pt1, pt2, to }));
    }

    /// Adds a QuadTo command to the path.
    pub fn quad_to(&mut self, ctrl: Vector2d, to: Vector2d) {
        self.commands
            .push(PathCommand::QuadTo(QuadraticBezierCurve { ctrl, to }));
    }

    /// Adds a RelQuadTo command to the path.
    pub fn rel_quad_to(&mut self, ctrl: Vector2d, to: Vector2d) {
        self.commands
            .push(PathCommand::RelQuadTo(QuadraticBezierCurve { ctrl, to }));
    }

    /// Adds an Arc command to the path.
    pub fn arc(&mut self, radius: Vector2d, rotation: f64, start_angle: f64) {
        self.commands.push(PathCommand::Arc(ArcSegment {
            radius,
            rotation,
            start_angle,
        }));
    }

    /// Adds an Arc command starting at the leftmost point of the ellipse.
    pub fn arc_half(&mut self, radius: Vector2d, rotation: f64) {
        self.arc(radius, rotation, PI);
    }

    /// Adds a SetTransform command to the path.
    pub fn set_transform(&mut self, t: Transform) {
        self.transform = t;
        self.commands.push(PathCommand::SetTransform(t));
    }

    /// Adds a SetOrigin command to the path.
    pub fn set_origin(&mut self, origin: Vector2d) {
        self.origin = origin;
        self.commands.push(PathCommand::SetOrigin(origin));
    }

    /// The transform of the most recent SetTransform command, if any.
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// The origin of the most recent SetOrigin command, if any.
    pub fn origin(&self) -> Vector2d {
        self.origin
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, PathCommand> {
        self.commands.iter()
    }

    pub fn push(&mut self, cmd: PathCommand) {
        self.commands.push(cmd);
    }

    pub fn pop(&mut self) -> Option<PathCommand> {
        self.commands.pop()
    }

    pub fn insert(&mut self, index: usize, cmd: PathCommand) {
        self.commands.insert(index, cmd);
    }

    pub fn remove(&mut self, index: usize) -> PathCommand {
        self.commands.remove(index)
    }

    /// Removes all commands and resets the recorded transform and origin.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.transform = Transform::identity();
        self.origin = Vector2d::zero();
    }
}

impl Index<usize> for PathBuilder {
    type Output = PathCommand;

    fn index(&self, index: usize) -> &PathCommand {
        &self.commands[index]
    }
}

impl IndexMut<usize> for PathBuilder {
    fn index_mut(&mut self, index: usize) -> &mut PathCommand {
        &mut self.commands[index]
    }
}

impl Extend<PathCommand> for PathBuilder {
    fn extend<T: IntoIterator<Item = PathCommand>>(&mut self, iter: T) {
        self.commands.extend(iter);
    }
}

impl<'a> IntoIterator for &'a PathBuilder {
    type Item = &'a PathCommand;
    type IntoIter = slice::Iter<'a, PathCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

impl IntoIterator for PathBuilder {
    type Item = PathCommand;
    type IntoIter = <TinyVec<[PathCommand; 32]> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.into_iter()
    }
}

/// An immutable, normalized path with a compact representation.
///
/// This is constructed from a [`PathBuilder`] with [`PathBuilder::to_path`].
/// Every segment in it is one of the four instructions a rendering backend
/// understands; arcs, quadratic curves, relative coordinates, and transform
/// changes have all been resolved away.
///
/// The variants in [`PathSegment`] have different sizes, so a simple array
/// of them would have a lot of slack space.  We reduce this to a minimum by
/// separating the segment tags from their coordinates into two dense arrays.
///
/// This struct implements `Default`, and it yields an empty path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    segments: Box<[PackedSegment]>,
    coords: Box<[f64]>,
}

/// Packed version of a `PathSegment`, used in `Path`.
///
/// This is `repr(u8)` to keep it as small as possible.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq)]
enum PackedSegment {
    MoveTo,
    LineTo,
    CurveTo,
    ClosePath,
}

fn segment_to_packed(segment: &PathSegment, coords: &mut Vec<f64>) -> PackedSegment {
    match *segment {
        PathSegment::MoveTo(pt) => {
            coords.push(pt.x);
            coords.push(pt.y);
            PackedSegment::MoveTo
        }

        PathSegment::LineTo(pt) => {
            coords.push(pt.x);
            coords.push(pt.y);
            PackedSegment::LineTo
        }

        PathSegment::CurveTo(ref c) => c.to_packed_and_coords(coords),

        PathSegment::ClosePath(pt) => {
            coords.push(pt.x);
            coords.push(pt.y);
            PackedSegment::ClosePath
        }
    }
}

fn segment_from_packed(packed: PackedSegment, coords: &mut slice::Iter<'_, f64>) -> PathSegment {
    match packed {
        PackedSegment::MoveTo => PathSegment::MoveTo(take_point(coords)),
        PackedSegment::LineTo => PathSegment::LineTo(take_point(coords)),
        PackedSegment::CurveTo => PathSegment::CurveTo(CubicBezierCurve::from_coords(coords)),
        PackedSegment::ClosePath => PathSegment::ClosePath(take_point(coords)),
    }
}

impl Path {
    fn from_segments(segments: &[PathSegment]) -> Path {
        let num_coords = segments
            .iter()
            .map(|segment| match segment {
                PathSegment::CurveTo(_) => 6,
                _ => 2,
            })
            .sum();

        let mut coords = Vec::with_capacity(num_coords);
        let packed: Vec<_> = segments
            .iter()
            .map(|segment| segment_to_packed(segment, &mut coords))
            .collect();

        Path {
            segments: packed.into_boxed_slice(),
            coords: coords.into_boxed_slice(),
        }
    }

    /// Get an iterator over the path's segments.
    pub fn iter(&self) -> impl Iterator<Item = PathSegment> + '_ {
        let segments = self.segments.iter();
        let mut coords = self.coords.iter();

        segments.map(move |segment| segment_from_packed(*segment, &mut coords))
    }

    /// Returns whether there are no segments in the path.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn num_segments(&self) -> usize {
        self.segments.len()
    }
}

fn take_one(iter: &mut slice::Iter<'_, f64>) -> f64 {
    *iter.next().unwrap()
}

fn take_point(iter: &mut slice::Iter<'_, f64>) -> Vector2d {
    Vector2d::new(take_one(iter), take_one(iter))
}
