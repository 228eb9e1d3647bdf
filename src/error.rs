//! Error types.

use std::error;
use std::fmt;

/// A transform is not invertible.
///
/// This generally means that the transform collapses the plane to a line
/// or a point, so it cannot be handed to a rendering backend.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct InvalidTransform;

impl error::Error for InvalidTransform {}

impl fmt::Display for InvalidTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid transform")
    }
}

/// Errors reported by path normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A transform in effect while resolving a command was singular or
    /// had a non-finite coefficient.
    InvalidMatrix,

    /// A lowered sequence is malformed, with a human-readable reason.
    InvalidPathData(String),
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidMatrix => write!(f, "invalid matrix"),
            Error::InvalidPathData(ref s) => write!(f, "invalid path data: {s}"),
        }
    }
}

impl From<InvalidTransform> for Error {
    fn from(_: InvalidTransform) -> Error {
        Error::InvalidMatrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(Error::InvalidMatrix.to_string(), "invalid matrix");
        assert_eq!(
            Error::InvalidPathData(String::from("no subpath")).to_string(),
            "invalid path data: no subpath"
        );
        assert_eq!(InvalidTransform.to_string(), "invalid transform");
    }
}
