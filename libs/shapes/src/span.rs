//! A one-dimensional span.
//!
//! A span represents the closed interval `[start, stop]`.
use serde::{Deserialize, Serialize};

use crate::contains::{Containment, Contains};
use crate::intersect::Intersect;

/// A closed interval of coordinates in one dimension.
///
/// Represents the range `[start, stop]`.
#[derive(
    Debug, Default, Clone, Copy, Hash, Ord, PartialOrd, Serialize, Deserialize, PartialEq, Eq,
)]
pub struct Span {
    start: i64,
    stop: i64,
}

impl Span {
    /// Creates a new [`Span`] between two integers.
    ///
    /// The endpoints are sorted, so `Span::new(5, 2)` is the same as `Span::new(2, 5)`.
    pub fn new(start: i64, stop: i64) -> Self {
        use std::cmp::{max, min};
        Self {
            start: min(start, stop),
            stop: max(start, stop),
        }
    }

    /// Creates a new [`Span`] between two integers.
    ///
    /// # Safety
    ///
    /// The caller must ensure that `start` is less
    /// than or equal to `stop`.
    pub const unsafe fn new_unchecked(start: i64, stop: i64) -> Self {
        Self { start, stop }
    }

    /// Gets the length of the span.
    ///
    /// The length is unsigned so that spans reaching across the whole `i64` range
    /// have a representable length.
    ///
    /// # Example
    ///
    /// ```
    /// # use shapes::prelude::*;
    /// assert_eq!(Span::new(-3, 4).length(), 7);
    /// assert_eq!(Span::new(i64::MIN, i64::MAX).length(), u64::MAX);
    /// ```
    #[inline]
    pub const fn length(&self) -> u64 {
        self.stop.abs_diff(self.start)
    }

    /// Gets the start of the span.
    #[inline]
    pub const fn start(&self) -> i64 {
        self.start
    }

    /// Gets the stop of the span.
    #[inline]
    pub const fn stop(&self) -> i64 {
        self.stop
    }

    /// Returns `true` if `x` is one of the two endpoints of the span.
    #[inline]
    pub const fn is_endpoint(&self, x: i64) -> bool {
        x == self.start || x == self.stop
    }

    /// Checks if the span intersects with the [`Span`] `other`.
    ///
    /// Spans that only touch at an endpoint intersect.
    #[inline]
    pub const fn intersects(&self, other: &Self) -> bool {
        !(other.stop < self.start || self.stop < other.start)
    }

    /// Returns `true` if this span overlaps `reference` over a positive length.
    ///
    /// The test is phrased in terms of this span's endpoints: the start must fall in
    /// `[reference.start, reference.stop)`, or the stop must fall in
    /// `(reference.start, reference.stop]`. This only detects every positive-length
    /// overlap when this span is no longer than `reference`, so callers pass the
    /// shorter of two spans as `self`.
    ///
    /// # Example
    ///
    /// ```
    /// # use shapes::prelude::*;
    /// let wide = Span::new(2, 5);
    /// assert!(Span::new(3, 4).overlaps_within(wide));
    /// assert!(Span::new(4, 7).overlaps_within(wide));
    /// assert!(Span::new(0, 3).overlaps_within(wide));
    /// assert!(!Span::new(5, 7).overlaps_within(wide));
    /// assert!(!Span::new(0, 2).overlaps_within(wide));
    /// ```
    #[inline]
    pub const fn overlaps_within(&self, reference: Span) -> bool {
        (self.start >= reference.start && self.start < reference.stop)
            || (self.stop > reference.start && self.stop <= reference.stop)
    }

    /// Calculates the intersection of this span with `other`.
    ///
    /// Returns [`None`] if the spans are disjoint. Spans that touch at a
    /// single point intersect in a zero-length span.
    pub fn intersection(self, other: Self) -> Option<Self> {
        let start = std::cmp::max(self.start(), other.start());
        let stop = std::cmp::min(self.stop(), other.stop());
        if start > stop {
            None
        } else {
            Some(Self::new(start, stop))
        }
    }
}

impl Intersect<Span> for Span {
    type Output = Self;
    fn intersect(&self, other: &Span) -> Option<Self::Output> {
        self.intersection(*other)
    }
}

impl Contains<Span> for Span {
    fn contains(&self, other: &Span) -> Containment {
        if other.start() >= self.start() && other.stop() <= self.stop() {
            Containment::Full
        } else if self.intersects(other) {
            Containment::Partial
        } else {
            Containment::None
        }
    }
}

impl Contains<i64> for Span {
    fn contains(&self, other: &i64) -> Containment {
        if *other >= self.start && *other <= self.stop {
            Containment::Full
        } else {
            Containment::None
        }
    }
}

impl From<(i64, i64)> for Span {
    #[inline]
    fn from(tup: (i64, i64)) -> Self {
        Self::new(tup.0, tup.1)
    }
}

impl From<Span> for (i64, i64) {
    #[inline]
    fn from(s: Span) -> Self {
        (s.start(), s.stop())
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use test_log::test;

    #[test]
    fn overlaps_within_excludes_touching_endpoints() {
        let reference = Span::new(0, 10);
        assert!(!Span::new(-5, 0).overlaps_within(reference));
        assert!(!Span::new(10, 12).overlaps_within(reference));
        assert!(Span::new(-5, 1).overlaps_within(reference));
        assert!(Span::new(9, 12).overlaps_within(reference));
        assert!(Span::new(0, 10).overlaps_within(reference));
    }

    #[test]
    fn overlaps_within_matches_positive_length_intersection() {
        for a0 in -4..4 {
            for a1 in (a0 + 1)..5 {
                for b0 in -4..4 {
                    for b1 in (b0 + 1)..5 {
                        let a = Span::new(a0, a1);
                        let b = Span::new(b0, b1);
                        let (short, long) = if a.length() <= b.length() {
                            (a, b)
                        } else {
                            (b, a)
                        };
                        let expected = a.intersection(b).is_some_and(|s| s.length() > 0);
                        assert_eq!(
                            short.overlaps_within(long),
                            expected,
                            "{a:?} vs {b:?}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn span_containment() {
        let span = Span::new(10, 20);
        assert_eq!(span.contains(&Span::new(12, 20)), Containment::Full);
        assert_eq!(span.contains(&Span::new(15, 25)), Containment::Partial);
        assert_eq!(span.contains(&Span::new(21, 25)), Containment::None);
        assert!(span.encloses(&10i64));
        assert!(!span.encloses(&21i64));
    }
}
