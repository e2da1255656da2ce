//! Horizontal drag recogniser.
//!
//! Decides, from a press position and the current pointer position, whether a
//! pointer stream has become a horizontal edge drag. The recogniser holds no
//! notion of offsets or animation; the container owns those.

use dragrefresh_ui_graphics::Point;

/// Edge a drag is pulling the child away from.
///
/// `Left` means the finger moves right while the child is already at its
/// left-most scroll position, revealing space on the left. `Right` is the
/// mirror image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DragDirection {
    Left,
    Right,
}

impl DragDirection {
    /// Clamp a drag distance so it never crosses back past the origin.
    pub fn clamp_drag(self, dx: f32) -> f32 {
        match self {
            DragDirection::Left => dx.max(0.0),
            DragDirection::Right => dx.min(0.0),
        }
    }
}

/// A recognised drag: its direction and the x position drag distances are
/// measured from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragStart {
    pub direction: DragDirection,
    /// Press x shifted by the touch slop toward the drag, so the child does not
    /// jump by the slop distance on the first dragged frame.
    pub reference_x: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragGesture {
    touch_slop: f32,
    down_position: Option<Point>,
}

impl DragGesture {
    pub fn new(touch_slop: f32) -> Self {
        Self {
            touch_slop,
            down_position: None,
        }
    }

    pub fn touch_slop(&self) -> f32 {
        self.touch_slop
    }

    /// Record the press position that later moves are measured against.
    pub fn press(&mut self, position: Point) {
        self.down_position = Some(position);
    }

    /// Classify a move against the recorded press.
    ///
    /// `can_scroll_further` reports whether the child still has content to
    /// scroll toward the given edge; a drag is only recognised toward an edge
    /// the child has already reached. The left edge is checked first, so it
    /// wins when the child cannot scroll at all. Horizontal movement must be at
    /// least as large as vertical movement; ties go to the drag.
    pub fn classify(
        &self,
        position: Point,
        can_scroll_further: impl Fn(DragDirection) -> bool,
    ) -> Option<DragStart> {
        let down = self.down_position?;
        let dist = position.x - down.x;
        let dist_y = position.y - down.y;
        let mostly_horizontal = dist.abs() >= dist_y.abs();

        log::trace!("move dist {dist}, dist_y {dist_y}, slop {}", self.touch_slop);

        if dist >= self.touch_slop && mostly_horizontal && !can_scroll_further(DragDirection::Left)
        {
            return Some(DragStart {
                direction: DragDirection::Left,
                reference_x: down.x + self.touch_slop,
            });
        }

        if dist <= -self.touch_slop
            && mostly_horizontal
            && !can_scroll_further(DragDirection::Right)
        {
            return Some(DragStart {
                direction: DragDirection::Right,
                reference_x: down.x - self.touch_slop,
            });
        }

        None
    }
}

#[cfg(test)]
#[path = "../../../tests/drag_gesture_tests.rs"]
mod tests;
