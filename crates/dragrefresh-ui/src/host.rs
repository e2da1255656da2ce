//! Host container seam.
//!
//! The controller never touches a view tree. Everything it needs from the
//! container holding the dragged child goes through [`DragHost`].

use dragrefresh_foundation::DragDirection;

/// Container holding the single dragged child.
pub trait DragHost {
    /// Whether the child still has content to scroll toward `direction`'s edge.
    ///
    /// A drag toward an edge is only recognised once this returns `false`.
    fn can_scroll_further(&self, direction: DragDirection) -> bool;

    /// Position the child `offset` whole pixels from rest (positive is right).
    ///
    /// Called with the absolute offset, only when it changes.
    fn apply_horizontal_offset(&mut self, offset: i32);

    /// Ask ancestor containers to stop (or resume) intercepting the current
    /// pointer stream.
    fn request_disallow_intercept(&mut self, _disallow: bool) {}
}
