//! Errors produced while building shapes.

use thiserror::Error;

use crate::point::Point;

/// An error constructing or parsing a shape.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum Error {
    /// The bottom-right corner is not strictly below and to the right of the top-left corner.
    #[error(
        "invalid rectangle coordinates: bottom-right {bottom_right} must be below (lesser y) \
         and to the right of (greater x) top-left {top_left}"
    )]
    InvalidRectangleCoordinates {
        /// The requested top-left corner.
        top_left: Point,
        /// The requested bottom-right corner.
        bottom_right: Point,
    },
    /// The input could not be parsed as an `x,y` point.
    #[error("invalid point `{0}`: expected `x,y`")]
    ParsePoint(String),
    /// The input could not be parsed as an `x,y:x,y` rectangle.
    #[error("invalid rectangle `{0}`: expected `x,y:x,y` (top-left:bottom-right)")]
    ParseRect(String),
}

/// A result type returning [`Error`] on failure.
pub type Result<T> = std::result::Result<T, Error>;
