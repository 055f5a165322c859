//! The two axes of the plane.

use serde::{Deserialize, Serialize};

/// An axis of the plane.
///
/// Rectangle queries are written once per axis: a [`Rect`](crate::rect::Rect) has a
/// [`Span`](crate::span::Span) along each `Dir`, and its edges along one axis sit at
/// coordinates of the other.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, PartialEq, Eq)]
pub enum Dir {
    /// The x-axis.
    Horiz,
    /// The y-axis.
    Vert,
}

impl Dir {
    /// Both axes, x first.
    pub const ALL: [Dir; 2] = [Dir::Horiz, Dir::Vert];

    /// Returns the perpendicular axis.
    pub const fn other(&self) -> Self {
        match *self {
            Self::Horiz => Self::Vert,
            Self::Vert => Self::Horiz,
        }
    }
}

impl std::ops::Not for Dir {
    type Output = Self;

    /// Returns the perpendicular axis.
    ///
    /// # Example
    ///
    /// ```
    /// # use shapes::prelude::*;
    /// assert_eq!(!Dir::Vert, Dir::Horiz);
    /// assert_eq!(!Dir::Horiz, Dir::Vert);
    /// ```
    fn not(self) -> Self::Output {
        self.other()
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use test_log::test;

    #[test]
    fn perpendicular_axis_is_an_involution() {
        for dir in Dir::ALL {
            assert_ne!(!dir, dir);
            assert_eq!(!!dir, dir);
        }
    }

    #[test]
    fn rect_spans_per_axis() {
        let rect = Rect::from_sides(2, 4, 5, 2).unwrap();
        assert_eq!(rect.span(Dir::Horiz), rect.hspan());
        assert_eq!(rect.span(!Dir::Horiz), rect.vspan());
    }
}
