//! Describes the corners of axis-aligned rectangles.
//!
//! # Examples
//!
//! You can access the corners of a [`Rect`](crate::rect::Rect):
//!
//! ```
//! # use shapes::prelude::*;
//! let rect = Rect::new(Point::new(10, 40), Point::new(30, 20)).unwrap();
//! assert_eq!(rect.corner(Corner::LowerRight), Point::new(30, 20));
//! assert_eq!(rect.corner(Corner::UpperRight), Point::new(30, 40));
//! ```

use serde::{Deserialize, Serialize};

use crate::dir::Dir;
use crate::side::Side;

/// An enumeration of the corners of an axis-aligned rectangle.
///
/// See the [module-level documentation](crate::corner) for examples.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, PartialEq, Eq)]
pub enum Corner {
    /// The upper-left corner.
    UpperLeft,
    /// The upper-right corner.
    UpperRight,
    /// The lower-left corner.
    LowerLeft,
    /// The lower-right corner.
    LowerRight,
}

impl Corner {
    /// All four corners.
    pub const ALL: [Corner; 4] = [
        Corner::UpperLeft,
        Corner::UpperRight,
        Corner::LowerLeft,
        Corner::LowerRight,
    ];

    /// Gets the [`Side`] corresponding to the given [`Dir`] for this corner.
    ///
    /// # Example
    ///
    /// ```
    /// # use shapes::prelude::*;
    /// assert_eq!(Corner::LowerLeft.side(Dir::Horiz), Side::Left);
    /// assert_eq!(Corner::LowerLeft.side(Dir::Vert), Side::Bot);
    /// assert_eq!(Corner::UpperRight.side(Dir::Horiz), Side::Right);
    /// assert_eq!(Corner::UpperRight.side(Dir::Vert), Side::Top);
    /// ```
    pub fn side(&self, dir: Dir) -> Side {
        use Corner::*;
        use Dir::*;
        use Side::*;
        match dir {
            Horiz => match self {
                LowerLeft | UpperLeft => Left,
                LowerRight | UpperRight => Right,
            },
            Vert => match self {
                LowerLeft | LowerRight => Bot,
                UpperLeft | UpperRight => Top,
            },
        }
    }
}
