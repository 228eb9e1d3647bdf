//! The rendering boundary.
//!
//! A backend receives a normalized path through [`PathSink`]; the four
//! methods mirror the four [`PathSegment`] variants one-to-one.  Nothing
//! else of the geometry core is visible to a backend.

use std::convert::Infallible;

use crate::path_builder::Path;
use crate::path_normalizer::PathSegment;
use crate::vector::Vector2d;

/// Receiver for the segments of a normalized path.
///
/// Implemented by rendering backends; a Cairo-style backend maps each
/// method to the corresponding context call.  Errors propagate out of
/// [`Path::send_to`] unchanged.
pub trait PathSink {
    type Error;

    /// Begins a new subpath at `pt`.
    fn begin_at(&mut self, pt: Vector2d) -> Result<(), Self::Error>;

    /// Draws a straight line from the current point to `pt`.
    fn line_to(&mut self, pt: Vector2d) -> Result<(), Self::Error>;

    /// Draws a cubic Bézier from the current point to `to`.
    fn curve_to(&mut self, pt1: Vector2d, pt2: Vector2d, to: Vector2d)
        -> Result<(), Self::Error>;

    /// Closes the current subpath back to `pt`.
    fn close(&mut self, pt: Vector2d) -> Result<(), Self::Error>;
}

impl Path {
    /// Walks the path's segments into `sink`, stopping at the first error.
    pub fn send_to<S: PathSink>(&self, sink: &mut S) -> Result<(), S::Error> {
        for segment in self.iter() {
            match segment {
                PathSegment::MoveTo(pt) => sink.begin_at(pt)?,
                PathSegment::LineTo(pt) => sink.line_to(pt)?,
                PathSegment::CurveTo(c) => sink.curve_to(c.pt1, c.pt2, c.to)?,
                PathSegment::ClosePath(pt) => sink.close(pt)?,
            }
        }

        Ok(())
    }
}

/// The trivial backend: collects segments into a `Vec`.
#[derive(Debug, Default, Clone)]
pub struct SegmentSink {
    segments: Vec<PathSegment>,
}

impl SegmentSink {
    pub fn new() -> SegmentSink {
        SegmentSink::default()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn into_segments(self) -> Vec<PathSegment> {
        self.segments
    }
}

impl PathSink for SegmentSink {
    type Error = Infallible;

    fn begin_at(&mut self, pt: Vector2d) -> Result<(), Infallible> {
        self.segments.push(PathSegment::MoveTo(pt));
        Ok(())
    }

    fn line_to(&mut self, pt: Vector2d) -> Result<(), Infallible> {
        self.segments.push(PathSegment::LineTo(pt));
        Ok(())
    }

    fn curve_to(
        &mut self,
        pt1: Vector2d,
        pt2: Vector2d,
        to: Vector2d,
    ) -> Result<(), Infallible> {
        self.segments
            .push(PathSegment::CurveTo(crate::path_builder::CubicBezierCurve {
                pt1,
                pt2,
                to,
            }));
        Ok(())
    }

    fn close(&mut self, pt: Vector2d) -> Result<(), Infallible> {
        self.segments.push(PathSegment::ClosePath(pt));
        Ok(())
    }
}
