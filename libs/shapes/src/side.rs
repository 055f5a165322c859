//! The sides of an axis-aligned rectangle.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::dir::Dir;

/// An enumeration of the sides of an axis-aligned rectangle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, PartialEq, Eq)]
pub enum Side {
    /// The left side.
    Left,
    /// The bottom side.
    Bot,
    /// The right side.
    Right,
    /// The top side.
    Top,
}

impl Side {
    /// Gets the direction of the coordinate this side fixes.
    ///
    /// Top and bottom sides are y-coordinates, so they lie on the **vertical** axis.
    /// Left and right sides are x-coordinates, so they lie on the **horizontal** axis.
    ///
    /// # Example
    ///
    /// ```
    /// # use shapes::prelude::*;
    /// assert_eq!(Side::Top.coord_dir(), Dir::Vert);
    /// assert_eq!(Side::Left.coord_dir(), Dir::Horiz);
    /// ```
    pub fn coord_dir(&self) -> Dir {
        match self {
            Side::Top | Side::Bot => Dir::Vert,
            Side::Left | Side::Right => Dir::Horiz,
        }
    }

    /// Returns the opposite side.
    ///
    /// # Example
    ///
    /// ```
    /// # use shapes::prelude::*;
    /// assert_eq!(Side::Top.other(), Side::Bot);
    /// assert_eq!(Side::Left.other(), Side::Right);
    /// ```
    pub fn other(&self) -> Self {
        match self {
            Side::Top => Side::Bot,
            Side::Right => Side::Left,
            Side::Bot => Side::Top,
            Side::Left => Side::Right,
        }
    }

    /// Returns the lower and upper sides bounding the given direction.
    ///
    /// # Example
    ///
    /// ```
    /// # use shapes::prelude::*;
    /// assert_eq!(Side::with_dir(Dir::Horiz), [Side::Left, Side::Right]);
    /// assert_eq!(Side::with_dir(Dir::Vert), [Side::Bot, Side::Top]);
    /// ```
    pub fn with_dir(dir: Dir) -> [Side; 2] {
        match dir {
            Dir::Horiz => [Side::Left, Side::Right],
            Dir::Vert => [Side::Bot, Side::Top],
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Bot => write!(f, "bottom"),
            Side::Right => write!(f, "right"),
            Side::Top => write!(f, "top"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use test_log::test;

    #[test]
    fn sides_bound_their_coordinate_direction() {
        for dir in Dir::ALL {
            let [lower, upper] = Side::with_dir(dir);
            assert_eq!(lower.coord_dir(), dir);
            assert_eq!(upper.coord_dir(), dir);
            assert_eq!(lower.other(), upper);
        }
    }

    #[test]
    fn rect_sides_follow_coord_dir() {
        let rect = Rect::from_sides(-2, 10, 2, 5).unwrap();
        for side in [Side::Left, Side::Bot, Side::Right, Side::Top] {
            let span = rect.span(side.coord_dir());
            assert!(span.is_endpoint(rect.side(side)), "{side}");
        }
        assert_eq!(rect.side(Side::Left), -2);
        assert_eq!(rect.side(Side::Top), 10);
    }
}
