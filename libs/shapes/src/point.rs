//! 2-D points.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dir::Dir;
use crate::error::Error;

/// A point on a two-dimensional Cartesian plane.
///
/// The y-axis grows upward.
#[derive(
    Debug, Copy, Clone, Default, Hash, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord,
)]
pub struct Point {
    /// The x-coordinate of the point.
    pub x: i64,
    /// The y-coordinate of the point.
    pub y: i64,
}

impl Point {
    /// Creates a new [`Point`] from (x,y) coordinates.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Returns the origin, `(0, 0)`.
    ///
    /// # Example
    ///
    /// ```
    /// # use shapes::prelude::*;
    /// let origin = Point::zero();
    /// assert_eq!(origin, Point::new(0, 0));
    /// ```
    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0, y: 0 }
    }

    /// Gets the coordinate associated with direction `dir`.
    ///
    /// # Example
    ///
    /// ```
    /// # use shapes::prelude::*;
    /// let p = Point::new(3, -7);
    /// assert_eq!(p.coord(Dir::Horiz), 3);
    /// assert_eq!(p.coord(Dir::Vert), -7);
    /// ```
    pub const fn coord(&self, dir: Dir) -> i64 {
        match dir {
            Dir::Horiz => self.x,
            Dir::Vert => self.y,
        }
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl FromStr for Point {
    type Err = Error;

    /// Parses a point written as `x,y`, optionally wrapped in parentheses.
    ///
    /// # Example
    ///
    /// ```
    /// # use shapes::prelude::*;
    /// assert_eq!("2,4".parse::<Point>().unwrap(), Point::new(2, 4));
    /// assert_eq!("(-3, 8)".parse::<Point>().unwrap(), Point::new(-3, 8));
    /// assert!("2;4".parse::<Point>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || Error::ParsePoint(s.to_string());
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('(')
            .and_then(|t| t.strip_suffix(')'))
            .unwrap_or(trimmed);
        let (x, y) = inner.split_once(',').ok_or_else(err)?;
        let x = x.trim().parse().map_err(|_| err())?;
        let y = y.trim().parse().map_err(|_| err())?;
        Ok(Self::new(x, y))
    }
}

impl std::ops::Add<Point> for Point {
    type Output = Self;
    fn add(self, rhs: Point) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub<Point> for Point {
    type Output = Self;
    fn sub(self, rhs: Point) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(i64, i64)> for Point {
    fn from(value: (i64, i64)) -> Self {
        Self {
            x: value.0,
            y: value.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use test_log::test;

    #[test]
    fn points_compare_componentwise() {
        assert_eq!(Point::new(2, 4), Point::from((2, 4)));
        assert_ne!(Point::new(2, 4), Point::new(4, 2));
        assert_eq!(Point::new(1, 1) + Point::new(-3, 2), Point::new(-2, 3));
        assert_eq!(Point::new(1, 1) - Point::new(-3, 2), Point::new(4, -1));
    }

    #[test]
    fn point_display_and_parse_agree() {
        let p = Point::new(-2, 10);
        assert_eq!(p.to_string(), "(-2, 10)");
        assert_eq!(p.to_string().parse::<Point>().unwrap(), p);
    }

    #[test]
    fn malformed_points_are_rejected() {
        for s in ["", "1", "1,", ",1", "a,b", "1,2,3", "(1,2"] {
            assert_eq!(s.parse::<Point>(), Err(Error::ParsePoint(s.to_string())));
        }
    }
}
