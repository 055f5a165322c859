//! Axis-aligned rectangles on an integer grid.
//!
//! Rectangles are built from a top-left and a bottom-right corner, with the y-axis
//! growing upward. Once built, a [`Rect`](crate::rect::Rect) answers three questions
//! about another rectangle: whether it is enclosed, whether the two share an edge, and
//! where their boundaries cross.
//!
//! # Examples
//!
//! ```
//! # use shapes::prelude::*;
//! let a = Rect::new(Point::new(4, 7), Point::new(6, 4))?;
//! let b = Rect::new(Point::new(2, 5), Point::new(5, 3))?;
//!
//! assert!(!a.encloses(&b));
//! assert!(!a.adjacent(&b));
//! assert_eq!(a.points_of_intersection(&b), vec![Point::new(4, 5), Point::new(5, 4)]);
//! # Ok::<(), shapes::error::Error>(())
//! ```
#![warn(missing_docs)]

pub mod contains;
pub mod corner;
pub mod dir;
pub mod error;
pub mod intersect;
pub mod point;
pub mod prelude;
pub mod rect;
pub mod side;
pub mod span;
