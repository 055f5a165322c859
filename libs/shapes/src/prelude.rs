//! An import prelude that re-exports commonly used items.

pub use crate::contains::{Containment, Contains};
pub use crate::corner::Corner;
pub use crate::dir::Dir;
pub use crate::error::Error;
pub use crate::intersect::Intersect;
pub use crate::point::Point;
pub use crate::rect::Rect;
pub use crate::side::Side;
pub use crate::span::Span;
