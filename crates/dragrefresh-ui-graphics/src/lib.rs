//! Pure math/data shared by the drag refresh crates.
//!
//! Geometry primitives and density units used to place the dragged child
//! and to resolve the configured maximum drag distance.

mod geometry;
mod unit;

pub use geometry::*;
pub use unit::*;

pub mod prelude {
    pub use crate::geometry::{EdgeInsets, Point, Rect, Size};
    pub use crate::unit::{Dp, Px};
}
