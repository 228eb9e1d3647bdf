//! Style, brush, clip, and compositing parameters.
//!
//! These are plain value objects; the geometry core records them and
//! passes them through to the rendering backend without interpreting
//! them.  Defaults follow the conventions of Cairo-style backends.

use std::rc::Rc;

use crate::error::Error;
use crate::path_builder::{Path, PathBuilder};
use crate::transform::ValidTransform;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum FillRule {
    #[default]
    Winding,
    EvenOdd,
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
    MiterOrBevel,
}

/// How a brush fills space beyond its natural extent.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum WrapMode {
    #[default]
    None,
    Repeat,
    Reflect,
    Pad,
}

/// Resampling quality for surface brushes and masks.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Filter {
    Fast,
    #[default]
    Good,
    Best,
    Nearest,
    Bilinear,
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Antialias {
    None,
    Fast,
    #[default]
    Good,
    Best,
}

/// Porter-Duff and extended compositing operators.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum CompositeOperator {
    #[default]
    Over,
    Clear,
    Source,
    In,
    Out,
    Atop,
    Dest,
    DestOver,
    DestIn,
    DestOut,
    DestAtop,
    Xor,
    Add,
    Saturate,
}

/// Parameters of a fill or stroke operation as a whole.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct RenderProps {
    pub antialias: Antialias,
    pub transform: ValidTransform,
    pub op: CompositeOperator,
}

impl RenderProps {
    pub fn new(antialias: Antialias, transform: ValidTransform, op: CompositeOperator) -> Self {
        Self {
            antialias,
            transform,
            op,
        }
    }
}

/// Pen parameters for stroking.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StrokeProps {
    pub line_width: f64,
    pub line_cap: LineCap,
    pub line_join: LineJoin,
    miter_limit: f64,
}

impl Default for StrokeProps {
    fn default() -> Self {
        Self {
            line_width: 2.0,
            line_cap: LineCap::default(),
            line_join: LineJoin::default(),
            miter_limit: 10.0,
        }
    }
}

impl StrokeProps {
    pub fn new(line_width: f64, line_cap: LineCap, line_join: LineJoin, miter_limit: f64) -> Self {
        Self {
            line_width,
            line_cap,
            line_join,
            miter_limit: miter_limit.max(1.0),
        }
    }

    #[inline]
    pub fn miter_limit(&self) -> f64 {
        self.miter_limit
    }

    /// Sets the miter limit; values below 1.0 are raised to 1.0.
    #[inline]
    pub fn set_miter_limit(&mut self, limit: f64) {
        self.miter_limit = limit.max(1.0);
    }
}

/// How a brush maps onto the area being painted.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct BrushProps {
    pub wrap: WrapMode,
    pub filter: Filter,
    pub fill_rule: FillRule,
    pub transform: ValidTransform,
}

/// A clip region given by a normalized path and a fill rule.
#[derive(Debug, Clone, PartialEq)]
pub struct ClipProps {
    pub path: Rc<Path>,
    pub fill_rule: FillRule,
}

impl ClipProps {
    /// Normalizes the builder's commands into the clip path.
    ///
    /// Fails if the builder's commands do not normalize, for example if
    /// a singular transform is in effect at a `ClosePath`.
    pub fn new(builder: &PathBuilder, fill_rule: FillRule) -> Result<Self, Error> {
        Ok(Self {
            path: Rc::new(builder.to_path()?),
            fill_rule,
        })
    }
}

/// Parameters for masked compositing.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct MaskProps {
    pub wrap: WrapMode,
    pub filter: Filter,
    pub transform: ValidTransform,
}
