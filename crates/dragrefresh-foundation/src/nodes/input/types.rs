use dragrefresh_ui_graphics::Point;
use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

impl PointerEventKind {
    /// Whether this event ends the pointer stream (`Up` or `Cancel`).
    pub fn is_terminal(self) -> bool {
        matches!(self, PointerEventKind::Up | PointerEventKind::Cancel)
    }
}

/// Single-pointer event with consumption tracking.
///
/// Events can be consumed by the drag container once it claims a gesture, so
/// that the child (and any ancestor) stops treating the stream as its own.
/// This mirrors `onInterceptTouchEvent` returning `true` on Android.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub position: Point,
    /// Shared via Rc<Cell> so consumption can be tracked across copies.
    consumed: Rc<Cell<bool>>,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point) -> Self {
        Self {
            kind,
            position,
            consumed: Rc::new(Cell::new(false)),
        }
    }

    pub fn down(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Down, Point::new(x, y))
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Move, Point::new(x, y))
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Up, Point::new(x, y))
    }

    pub fn cancel(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Cancel, Point::new(x, y))
    }

    /// Mark this event as consumed, preventing other handlers from processing it.
    pub fn consume(&self) {
        self.consumed.set(true);
    }

    /// Check if this event has been consumed by another handler.
    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_up_and_cancel_end_the_stream() {
        assert!(PointerEvent::up(0.0, 0.0).kind.is_terminal());
        assert!(PointerEvent::cancel(0.0, 0.0).kind.is_terminal());
        assert!(!PointerEvent::down(0.0, 0.0).kind.is_terminal());
        assert!(!PointerEvent::moved(0.0, 0.0).kind.is_terminal());
    }

    #[test]
    fn clones_share_consumption() {
        let event = PointerEvent::moved(10.0, 4.0);
        let queued = event.clone();
        assert!(!event.is_consumed());
        queued.consume();
        assert!(event.is_consumed());
    }
}
