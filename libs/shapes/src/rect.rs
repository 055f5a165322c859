//! Axis-aligned rectangles.

use std::fmt::Display;
use std::str::FromStr;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::contains::{Containment, Contains};
use crate::corner::Corner;
use crate::dir::Dir;
use crate::error::{Error, Result};
use crate::intersect::Intersect;
use crate::point::Point;
use crate::side::Side;
use crate::span::Span;

/// An axis-aligned rectangle of positive area, specified by its top-left and bottom-right
/// corners.
///
/// The y-axis grows upward, so the top-left corner has the lesser x-coordinate and the
/// greater y-coordinate. A [`Rect`] can only be obtained through [`Rect::new`] (or
/// something that calls it), which guarantees `left < right` and `bot < top`.
#[derive(Debug, Copy, Clone, Hash, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(try_from = "RectCorners", into = "RectCorners")]
pub struct Rect {
    top_left: Point,
    bottom_right: Point,
}

/// The serialized form of a [`Rect`].
///
/// Deserialization goes through [`Rect::new`], so invalid corners are rejected.
#[derive(Serialize, Deserialize)]
struct RectCorners {
    top_left: Point,
    bottom_right: Point,
}

impl TryFrom<RectCorners> for Rect {
    type Error = Error;

    fn try_from(value: RectCorners) -> Result<Self> {
        Rect::new(value.top_left, value.bottom_right)
    }
}

impl From<Rect> for RectCorners {
    fn from(value: Rect) -> Self {
        Self {
            top_left: value.top_left,
            bottom_right: value.bottom_right,
        }
    }
}

impl Rect {
    /// Creates a rectangle from its top-left and bottom-right corners.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRectangleCoordinates`] if `bottom_right.x <= top_left.x`
    /// or `bottom_right.y >= top_left.y`. Zero-width and zero-height rectangles are
    /// rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shapes::prelude::*;
    /// let rect = Rect::new(Point::new(2, 4), Point::new(5, 2)).unwrap();
    /// assert_eq!(rect.left(), 2);
    /// assert_eq!(rect.top(), 4);
    /// assert_eq!(rect.right(), 5);
    /// assert_eq!(rect.bot(), 2);
    /// ```
    ///
    /// Corners in the wrong order are an error:
    ///
    /// ```
    /// # use shapes::prelude::*;
    /// let err = Rect::new(Point::new(0, 0), Point::new(2, 2)).unwrap_err();
    /// assert!(matches!(err, Error::InvalidRectangleCoordinates { .. }));
    /// ```
    pub fn new(top_left: Point, bottom_right: Point) -> Result<Self> {
        match Self::from_corners_option(top_left, bottom_right) {
            Some(rect) => Ok(rect),
            None => {
                tracing::debug!(%top_left, %bottom_right, "rejected invalid rectangle corners");
                Err(Error::InvalidRectangleCoordinates {
                    top_left,
                    bottom_right,
                })
            }
        }
    }

    /// Creates a rectangle from all 4 sides (left, top, right, bottom).
    ///
    /// Validation is the same as for [`Rect::new`].
    ///
    /// # Example
    ///
    /// ```
    /// # use shapes::prelude::*;
    /// let rect = Rect::from_sides(-2, 10, 2, 5).unwrap();
    /// assert_eq!(rect.top_left(), Point::new(-2, 10));
    /// assert_eq!(rect.bottom_right(), Point::new(2, 5));
    /// assert!(Rect::from_sides(0, 5, 0, 0).is_err());
    /// ```
    pub fn from_sides(left: i64, top: i64, right: i64, bot: i64) -> Result<Self> {
        Self::new(Point::new(left, top), Point::new(right, bot))
    }

    /// Creates a rectangle from its corners, returning [`None`] where [`Rect::new`]
    /// would return an error.
    fn from_corners_option(top_left: Point, bottom_right: Point) -> Option<Self> {
        if bottom_right.x <= top_left.x || bottom_right.y >= top_left.y {
            None
        } else {
            Some(Self {
                top_left,
                bottom_right,
            })
        }
    }

    /// Returns the top-left corner.
    #[inline]
    pub const fn top_left(&self) -> Point {
        self.top_left
    }

    /// Returns the bottom-right corner.
    #[inline]
    pub const fn bottom_right(&self) -> Point {
        self.bottom_right
    }

    /// Returns the bottom-left corner.
    ///
    /// # Example
    ///
    /// ```
    /// # use shapes::prelude::*;
    /// let rect = Rect::from_sides(2, 4, 5, 2).unwrap();
    /// assert_eq!(rect.bottom_left(), Point::new(2, 2));
    /// ```
    #[inline]
    pub const fn bottom_left(&self) -> Point {
        Point::new(self.top_left.x, self.bottom_right.y)
    }

    /// Returns the top-right corner.
    ///
    /// # Example
    ///
    /// ```
    /// # use shapes::prelude::*;
    /// let rect = Rect::from_sides(2, 4, 5, 2).unwrap();
    /// assert_eq!(rect.top_right(), Point::new(5, 4));
    /// ```
    #[inline]
    pub const fn top_right(&self) -> Point {
        Point::new(self.bottom_right.x, self.top_left.y)
    }

    /// Returns the left x-coordinate of the rectangle.
    #[inline]
    pub const fn left(&self) -> i64 {
        self.top_left.x
    }

    /// Returns the right x-coordinate of the rectangle.
    #[inline]
    pub const fn right(&self) -> i64 {
        self.bottom_right.x
    }

    /// Returns the top y-coordinate of the rectangle.
    #[inline]
    pub const fn top(&self) -> i64 {
        self.top_left.y
    }

    /// Returns the bottom y-coordinate of the rectangle.
    #[inline]
    pub const fn bot(&self) -> i64 {
        self.bottom_right.y
    }

    /// Returns the horizontal [`Span`] of the rectangle.
    ///
    /// # Example
    ///
    /// ```
    /// # use shapes::prelude::*;
    /// let rect = Rect::from_sides(10, 40, 30, 20).unwrap();
    /// assert_eq!(rect.hspan(), Span::new(10, 30));
    /// ```
    pub const fn hspan(&self) -> Span {
        unsafe {
            // SAFETY: A valid Rect has left < right
            Span::new_unchecked(self.left(), self.right())
        }
    }

    /// Returns the vertical [`Span`] of the rectangle.
    ///
    /// # Example
    ///
    /// ```
    /// # use shapes::prelude::*;
    /// let rect = Rect::from_sides(10, 40, 30, 20).unwrap();
    /// assert_eq!(rect.vspan(), Span::new(20, 40));
    /// ```
    pub const fn vspan(&self) -> Span {
        unsafe {
            // SAFETY: A valid Rect has bot < top
            Span::new_unchecked(self.bot(), self.top())
        }
    }

    /// Returns the span of the rectangle in the given direction.
    pub const fn span(&self, dir: Dir) -> Span {
        match dir {
            Dir::Horiz => self.hspan(),
            Dir::Vert => self.vspan(),
        }
    }

    /// Returns the length of the rectangle in the given direction.
    ///
    /// # Example
    ///
    /// ```
    /// # use shapes::prelude::*;
    /// let rect = Rect::from_sides(0, 10, 4, 0).unwrap();
    /// assert_eq!(rect.length(Dir::Horiz), 4);
    /// assert_eq!(rect.length(Dir::Vert), 10);
    /// ```
    pub const fn length(&self, dir: Dir) -> u64 {
        self.span(dir).length()
    }

    /// Returns the lesser coordinate in the given direction.
    ///
    /// That is the left edge for [`Dir::Horiz`] and the bottom edge for [`Dir::Vert`].
    pub const fn lower_coord(&self, dir: Dir) -> i64 {
        self.span(dir).start()
    }

    /// Returns the greater coordinate in the given direction.
    ///
    /// That is the right edge for [`Dir::Horiz`] and the top edge for [`Dir::Vert`].
    pub const fn upper_coord(&self, dir: Dir) -> i64 {
        self.span(dir).stop()
    }

    /// Returns the width (x-extent) of the rectangle.
    pub const fn width(&self) -> u64 {
        self.length(Dir::Horiz)
    }

    /// Returns the height (y-extent) of the rectangle.
    pub const fn height(&self) -> u64 {
        self.length(Dir::Vert)
    }

    /// Returns the area of the rectangle.
    ///
    /// The product is widened to `u128`, which holds the area of any valid rectangle.
    ///
    /// # Example
    ///
    /// ```
    /// # use shapes::prelude::*;
    /// let rect = Rect::from_sides(2, 4, 5, 2).unwrap();
    /// assert_eq!(rect.area(), 6);
    /// ```
    pub const fn area(&self) -> u128 {
        self.width() as u128 * self.height() as u128
    }

    /// Returns the coordinate of the given side of the rectangle.
    ///
    /// # Example
    ///
    /// ```
    /// # use shapes::prelude::*;
    /// let rect = Rect::from_sides(20, 200, 100, 20).unwrap();
    /// assert_eq!(rect.side(Side::Bot), 20);
    /// assert_eq!(rect.side(Side::Left), 20);
    /// assert_eq!(rect.side(Side::Top), 200);
    /// assert_eq!(rect.side(Side::Right), 100);
    /// ```
    #[inline]
    pub fn side(&self, side: Side) -> i64 {
        match side {
            Side::Left | Side::Bot => self.lower_coord(side.coord_dir()),
            Side::Right | Side::Top => self.upper_coord(side.coord_dir()),
        }
    }

    /// Returns the desired corner of the rectangle.
    pub fn corner(&self, corner: Corner) -> Point {
        Point::new(
            self.side(corner.side(Dir::Horiz)),
            self.side(corner.side(Dir::Vert)),
        )
    }

    /// Returns all four corners, in the order of [`Corner::ALL`].
    pub fn corners(&self) -> [Point; 4] {
        Corner::ALL.map(|corner| self.corner(corner))
    }

    /// Returns `true` if `p` is one of the four corners of the rectangle.
    ///
    /// # Example
    ///
    /// ```
    /// # use shapes::prelude::*;
    /// let rect = Rect::from_sides(2, 4, 5, 2).unwrap();
    /// assert!(rect.is_corner(Point::new(5, 4)));
    /// assert!(!rect.is_corner(Point::new(3, 4)));
    /// ```
    pub fn is_corner(&self, p: Point) -> bool {
        self.hspan().is_endpoint(p.x) && self.vspan().is_endpoint(p.y)
    }

    /// Calculates the overlap of this rectangle with `other`.
    ///
    /// The overlap takes the innermost of each pair of sides. Rectangles that are
    /// disjoint, or only touch along an edge or at a corner, have no overlap.
    ///
    /// # Example
    ///
    /// ```
    /// # use shapes::prelude::*;
    /// let a = Rect::from_sides(4, 7, 6, 4).unwrap();
    /// let b = Rect::from_sides(2, 5, 5, 3).unwrap();
    /// assert_eq!(a.intersection(&b), Some(Rect::from_sides(4, 5, 5, 4).unwrap()));
    ///
    /// let c = Rect::from_sides(6, 7, 8, 4).unwrap();
    /// assert_eq!(a.intersection(&c), None);
    /// ```
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let top_left = Point::new(
            std::cmp::max(self.left(), other.left()),
            std::cmp::min(self.top(), other.top()),
        );
        let bottom_right = Point::new(
            std::cmp::min(self.right(), other.right()),
            std::cmp::max(self.bot(), other.bot()),
        );
        Self::from_corners_option(top_left, bottom_right)
    }

    /// Returns the side of this rectangle along which it is adjacent to `other`.
    ///
    /// Two rectangles are adjacent when they share an edge segment of positive length;
    /// touching at a single corner does not count. The returned side belongs to `self`:
    /// if `a.shared_side(&b)` is `Some(side)`, then `b.shared_side(&a)` is
    /// `Some(side.other())`.
    ///
    /// # Example
    ///
    /// ```
    /// # use shapes::prelude::*;
    /// let a = Rect::from_sides(2, 4, 5, 2).unwrap();
    /// let b = Rect::from_sides(5, 4, 7, 3).unwrap();
    /// assert_eq!(a.shared_side(&b), Some(Side::Right));
    /// assert_eq!(b.shared_side(&a), Some(Side::Left));
    /// ```
    pub fn shared_side(&self, other: &Rect) -> Option<Side> {
        let side = Dir::ALL
            .into_iter()
            .find_map(|edge_dir| self.shared_side_along(other, edge_dir));
        tracing::trace!(rect = %self, %other, ?side, "checked adjacency");
        side
    }

    /// Looks for a shared edge running in direction `edge_dir`.
    ///
    /// The longer of the two spans in `edge_dir` is the reference range for the overlap
    /// test, whichever rectangle it belongs to.
    fn shared_side_along(&self, other: &Rect, edge_dir: Dir) -> Option<Side> {
        let (ours, theirs) = (self.span(edge_dir), other.span(edge_dir));
        let (shorter, longer) = if ours.length() <= theirs.length() {
            (ours, theirs)
        } else {
            (theirs, ours)
        };
        if !shorter.overlaps_within(longer) {
            return None;
        }

        let [lower, upper] = Side::with_dir(!edge_dir);
        if self.side(upper) == other.side(lower) {
            Some(upper)
        } else if self.side(lower) == other.side(upper) {
            Some(lower)
        } else {
            None
        }
    }

    /// Returns `true` if this rectangle and `other` share an edge segment of positive
    /// length.
    ///
    /// Adjacency is symmetric. Rectangles touching only at a corner are not adjacent.
    ///
    /// # Example
    ///
    /// ```
    /// # use shapes::prelude::*;
    /// let a = Rect::from_sides(2, 4, 5, 2).unwrap();
    /// let b = Rect::from_sides(5, 4, 7, 3).unwrap();
    /// let c = Rect::from_sides(5, 2, 7, 0).unwrap();
    /// assert!(a.adjacent(&b));
    /// assert!(!a.adjacent(&c));
    /// ```
    pub fn adjacent(&self, other: &Rect) -> bool {
        self.shared_side(other).is_some()
    }

    /// Returns the points where the boundaries of this rectangle and `other` cross.
    ///
    /// Candidates are the corners of the overlap of the two rectangles. A candidate is
    /// kept when it lies on a vertical edge of one rectangle and a horizontal edge of
    /// the other, and is not a corner of either rectangle. Rectangles that do not
    /// overlap, that are merely adjacent, or that are identical have no crossings.
    ///
    /// The points are unique. Their order is deterministic but carries no meaning;
    /// swapping `self` and `other` yields the same set of points.
    ///
    /// # Example
    ///
    /// ```
    /// # use shapes::prelude::*;
    /// let a = Rect::from_sides(4, 7, 6, 4).unwrap();
    /// let b = Rect::from_sides(2, 5, 5, 3).unwrap();
    /// assert_eq!(
    ///     a.points_of_intersection(&b),
    ///     vec![Point::new(4, 5), Point::new(5, 4)],
    /// );
    /// ```
    pub fn points_of_intersection(&self, other: &Rect) -> Vec<Point> {
        let Some(overlap) = self.intersection(other) else {
            tracing::trace!(rect = %self, %other, "no overlap, no crossings");
            return Vec::new();
        };

        let crosses = |p: &Point, vertical: &Rect, horizontal: &Rect| {
            vertical.hspan().is_endpoint(p.x) && horizontal.vspan().is_endpoint(p.y)
        };
        let points: IndexSet<Point> = overlap
            .corners()
            .into_iter()
            .filter(|p| crosses(p, self, other) || crosses(p, other, self))
            .filter(|p| !self.is_corner(*p) && !other.is_corner(*p))
            .collect();

        tracing::trace!(rect = %self, %other, %overlap, ?points, "computed boundary crossings");
        points.into_iter().collect()
    }
}

impl Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}-{}]", self.top_left, self.bottom_right)
    }
}

impl FromStr for Rect {
    type Err = Error;

    /// Parses a rectangle written as `x,y:x,y` (top-left, then bottom-right).
    ///
    /// # Example
    ///
    /// ```
    /// # use shapes::prelude::*;
    /// let rect: Rect = "2,4:5,2".parse().unwrap();
    /// assert_eq!(rect, Rect::from_sides(2, 4, 5, 2).unwrap());
    /// assert!("5,2:2,4".parse::<Rect>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self> {
        let (top_left, bottom_right) = s
            .split_once(':')
            .ok_or_else(|| Error::ParseRect(s.to_string()))?;
        Self::new(top_left.parse()?, bottom_right.parse()?)
    }
}

impl Intersect<Rect> for Rect {
    type Output = Self;

    fn intersect(&self, other: &Rect) -> Option<Self::Output> {
        self.intersection(other)
    }
}

impl Contains<Rect> for Rect {
    /// Full containment is boundary-inclusive, so every rectangle encloses itself.
    /// Partial containment requires an overlap of positive area.
    fn contains(&self, other: &Rect) -> Containment {
        if other.left() >= self.left()
            && other.top() <= self.top()
            && other.right() <= self.right()
            && other.bot() >= self.bot()
        {
            Containment::Full
        } else if self.intersection(other).is_some() {
            Containment::Partial
        } else {
            Containment::None
        }
    }
}

impl Contains<Point> for Rect {
    fn contains(&self, other: &Point) -> Containment {
        if self.hspan().encloses(&other.x) && self.vspan().encloses(&other.y) {
            Containment::Full
        } else {
            Containment::None
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use test_log::test;

    fn rect(left: i64, top: i64, right: i64, bot: i64) -> Rect {
        Rect::from_sides(left, top, right, bot).unwrap()
    }

    #[test]
    fn construction_rejects_misordered_corners() {
        let cases = [
            // bottom-right behind top-left
            (Point::new(0, 0), Point::new(-1, -3)),
            // bottom-right above top-left
            (Point::new(0, 0), Point::new(2, 2)),
            // zero width
            (Point::new(1, 5), Point::new(1, 0)),
            // zero height
            (Point::new(1, 5), Point::new(4, 5)),
        ];
        for (top_left, bottom_right) in cases {
            assert_eq!(
                Rect::new(top_left, bottom_right),
                Err(Error::InvalidRectangleCoordinates {
                    top_left,
                    bottom_right
                })
            );
        }
    }

    #[test]
    fn derived_corners() {
        let r = rect(2, 4, 5, 2);
        assert_eq!(r.corner(Corner::UpperLeft), Point::new(2, 4));
        assert_eq!(r.corner(Corner::UpperRight), Point::new(5, 4));
        assert_eq!(r.corner(Corner::LowerLeft), Point::new(2, 2));
        assert_eq!(r.corner(Corner::LowerRight), Point::new(5, 2));
        assert_eq!(
            r.corners(),
            [r.top_left(), r.top_right(), r.bottom_left(), r.bottom_right()]
        );
    }

    #[test]
    fn containment_is_boundary_inclusive() {
        let a = rect(2, 4, 5, 2);
        let b = rect(3, 3, 4, 2);
        assert!(a.encloses(&b));
        assert!(!b.encloses(&a));
        assert!(a.encloses(&a));
        assert_eq!(b.contains(&a), Containment::Partial);
        assert!(b.partially_intersects(&a));
    }

    #[test]
    fn containment_of_disjoint_and_touching_rects() {
        let a = rect(2, 4, 5, 2);
        assert_eq!(a.contains(&rect(10, 10, 14, 7)), Containment::None);
        assert_eq!(a.contains(&rect(5, 4, 7, 3)), Containment::None);
        assert_eq!(a.contains(&rect(4, 6, 8, 3)), Containment::Partial);
    }

    #[test]
    fn containment_of_points() {
        let a = rect(2, 4, 5, 2);
        assert!(a.encloses(&Point::new(2, 4)));
        assert!(a.encloses(&Point::new(3, 3)));
        assert!(!a.encloses(&Point::new(6, 3)));
    }

    #[test]
    fn adjacency_along_each_side() {
        let a = rect(2, 4, 5, 2);
        assert_eq!(a.shared_side(&rect(5, 4, 7, 3)), Some(Side::Right));
        assert_eq!(a.shared_side(&rect(0, 3, 2, 1)), Some(Side::Left));
        assert_eq!(a.shared_side(&rect(2, 2, 3, 0)), Some(Side::Bot));
        assert_eq!(a.shared_side(&rect(1, 9, 8, 4)), Some(Side::Top));
    }

    #[test]
    fn corner_contact_is_not_adjacency() {
        let a = rect(2, 4, 5, 2);
        assert!(!a.adjacent(&rect(5, 2, 7, 0)));
        assert!(!a.adjacent(&rect(0, 6, 2, 4)));
        assert!(!a.adjacent(&rect(10, 10, 14, 7)));
    }

    #[test]
    fn adjacency_uses_the_wider_rect_as_reference() {
        // The narrow rectangle sits strictly inside the wide one's x-range, so neither
        // of the wide rectangle's x-bounds falls inside the narrow one.
        let wide = rect(0, 4, 10, 2);
        let narrow = rect(4, 2, 6, 0);
        assert!(wide.adjacent(&narrow));
        assert!(narrow.adjacent(&wide));

        let tall = rect(0, 10, 2, 0);
        let short = rect(2, 6, 5, 4);
        assert!(tall.adjacent(&short));
        assert!(short.adjacent(&tall));
    }

    #[test]
    fn overlapping_rects_are_not_adjacent() {
        let a = rect(2, 4, 5, 2);
        assert!(!a.adjacent(&a));
        assert!(!a.adjacent(&rect(3, 3, 4, 2)));
    }

    #[test]
    fn crossing_points_two() {
        let a = rect(4, 7, 6, 4);
        let b = rect(2, 5, 5, 3);
        assert_eq!(
            a.points_of_intersection(&b),
            vec![Point::new(4, 5), Point::new(5, 4)]
        );
    }

    #[test]
    fn crossing_points_four() {
        let a = rect(-2, 10, 2, 5);
        let b = rect(-3, 8, 3, 6);
        assert_eq!(
            a.points_of_intersection(&b),
            vec![
                Point::new(-2, 8),
                Point::new(2, 8),
                Point::new(-2, 6),
                Point::new(2, 6),
            ]
        );
    }

    #[test]
    fn no_crossings_without_proper_overlap() {
        let a = rect(2, 4, 5, 2);
        assert!(a.points_of_intersection(&a).is_empty());
        assert!(a.points_of_intersection(&rect(10, 10, 14, 7)).is_empty());
        assert!(a.points_of_intersection(&rect(5, 4, 7, 3)).is_empty());
        assert!(a.points_of_intersection(&rect(3, 3, 4, 2)).is_empty());
    }

    #[test]
    fn display_and_parse() {
        let r = rect(2, 4, 5, 2);
        assert_eq!(r.to_string(), "[(2, 4)-(5, 2)]");
        assert_eq!(" 2, 4 : 5, 2".parse::<Rect>(), Ok(r));
        assert_eq!(
            "2,4".parse::<Rect>(),
            Err(Error::ParseRect("2,4".to_string()))
        );
        assert_eq!(
            "2,4:x,2".parse::<Rect>(),
            Err(Error::ParsePoint("x,2".to_string()))
        );
    }

    #[test]
    fn serde_validates_corners() {
        let r = rect(-2, 10, 2, 5);
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(
            json,
            r#"{"top_left":{"x":-2,"y":10},"bottom_right":{"x":2,"y":5}}"#
        );
        assert_eq!(serde_json::from_str::<Rect>(&json).unwrap(), r);

        let invalid = r#"{"top_left":{"x":0,"y":0},"bottom_right":{"x":2,"y":2}}"#;
        assert!(serde_json::from_str::<Rect>(invalid).is_err());
    }
}
