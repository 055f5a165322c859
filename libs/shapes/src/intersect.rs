//! Overlapping regions of two shapes.

/// Computes the region shared by this shape and another.
pub trait Intersect<T: ?Sized> {
    /// The shape describing the shared region.
    type Output;

    /// Returns the region shared by this shape and `other`.
    ///
    /// Returns [`None`] when the shapes share no region of the kind
    /// `Output` can represent. For [`Rect`](crate::rect::Rect) this means
    /// shapes touching only along an edge or at a corner have no intersection.
    fn intersect(&self, other: &T) -> Option<Self::Output>;
}
