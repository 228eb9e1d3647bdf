//! Build Bézier paths and lower them to a rendering backend's native form.
//!
//! This crate is the geometry core of a standard-library-style 2D drawing
//! API.  It does not rasterize anything; it records drawing commands,
//! resolves them against an evolving affine transform and movable origin,
//! and produces an immutable, backend-ready path whose only primitives are
//! "begin subpath", "line to", "cubic curve to", and "close subpath" —
//! the four operations every Cairo-style backend understands.
//!
//! # Basic usage
//!
//! * Record commands into a [`PathBuilder`].
//! * Turn the builder into an immutable [`Path`] with [`PathBuilder::to_path`];
//!   this runs the normalization pipeline, converting arcs and quadratic
//!   curves to cubic Béziers and resolving relative coordinates and
//!   transforms.
//! * Hand the [`Path`] to a backend through the [`PathSink`] trait.
//!
//! # Example
//!
//! ```
//! use draw2d::{PathBuilder, SegmentSink, Vector2d};
//!
//! let mut builder = PathBuilder::new();
//! builder.move_to(Vector2d::new(10.0, 10.0));
//! builder.line_to(Vector2d::new(100.0, 10.0));
//! builder.quad_to(Vector2d::new(150.0, 60.0), Vector2d::new(100.0, 110.0));
//! builder.close_path();
//!
//! let path = builder.to_path().unwrap();
//!
//! let mut sink = SegmentSink::default();
//! path.send_to(&mut sink).unwrap();
//! assert_eq!(sink.segments().len(), 5); // move, line, curve, close, re-open move
//! ```
//!
//! Brush, stroke, clip, and compositing parameters are plain value types in
//! the [`properties`] module; the core passes them through to the backend
//! without interpreting them.

#![warn(nonstandard_style, rust_2018_idioms, unused)]
// Standalone lints
#![warn(trivial_casts, trivial_numeric_casts)]

pub use crate::color::{Color, ColorStop};
pub use crate::error::{Error, InvalidTransform};
pub use crate::path_builder::{
    ArcSegment, CubicBezierCurve, Path, PathBuilder, PathCommand, QuadraticBezierCurve,
};
pub use crate::path_normalizer::{normalize, normalize_partial, PathSegment};
pub use crate::rect::Rect;
pub use crate::sink::{PathSink, SegmentSink};
pub use crate::transform::{Transform, ValidTransform};
pub use crate::vector::{angle_for_point, point_for_angle, Vector2d};

mod color;
mod error;
mod float_eq;
#[doc(hidden)]
pub mod log;
mod path_builder;
mod path_normalizer;
pub mod properties;
mod rect;
mod sink;
mod transform;
mod util;
mod vector;
