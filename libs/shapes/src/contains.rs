//! Containment of one shape in another.
//!
//! Containment of a [`Rect`](crate::rect::Rect) is boundary-inclusive: a rectangle
//! lying on the edges of another is still fully contained, and every rectangle
//! contains itself.
//!
//! ```
//! # use shapes::prelude::*;
//! let outer = Rect::from_sides(2, 4, 5, 2).unwrap();
//! let inner = Rect::from_sides(3, 3, 4, 2).unwrap();
//! assert!(outer.encloses(&inner));
//! assert!(outer.encloses(&outer));
//! assert_eq!(inner.contains(&outer), Containment::Partial);
//! ```

use serde::{Deserialize, Serialize};

/// How much of one shape lies inside another.
#[derive(
    Debug, Default, Clone, Copy, Serialize, Deserialize, Hash, PartialEq, Eq, Ord, PartialOrd,
)]
pub enum Containment {
    /// The shapes share no region of positive area.
    ///
    /// Rectangles touching only along an edge or at a corner fall here.
    #[default]
    None,
    /// The shapes overlap over a positive area, but the inner shape
    /// extends past the enclosing one.
    Partial,
    /// Every point of the inner shape lies inside or on the boundary of the enclosing shape.
    Full,
}

/// A shape that can report how much of a `T` lies inside it.
pub trait Contains<T> {
    /// Classifies how `other` lies within this shape.
    fn contains(&self, other: &T) -> Containment;

    /// Returns `true` if `other` lies entirely inside this shape or on its boundary.
    #[inline]
    fn encloses(&self, other: &T) -> bool {
        self.contains(other).is_full()
    }

    /// Returns `true` if `other` overlaps this shape over a positive area.
    #[inline]
    fn partially_intersects(&self, other: &T) -> bool {
        self.contains(other).intersects()
    }
}

impl Containment {
    /// Returns `true` for [`Containment::Full`].
    #[inline]
    pub fn is_full(&self) -> bool {
        matches!(self, Self::Full)
    }

    /// Returns `true` for [`Containment::Full`] and [`Containment::Partial`].
    #[inline]
    pub fn intersects(&self) -> bool {
        matches!(self, Self::Full | Self::Partial)
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use test_log::test;

    #[test]
    fn edge_contact_is_not_containment() {
        let a = Rect::from_sides(2, 4, 5, 2).unwrap();
        let beside = Rect::from_sides(5, 4, 7, 3).unwrap();
        assert_eq!(a.contains(&beside), Containment::None);
        assert!(!a.partially_intersects(&beside));
        assert!(a.encloses(&Point::new(5, 3)));
    }
}
