//! Listener that records notifications for later assertions.

use dragrefresh_ui::OnDragListener;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragEvent {
    LeftDragTriggered,
    LeftDragAnimationFinished,
    RightDragTriggered,
    RightDragAnimationFinished,
}

/// Shared view of the notifications a [`RecordingListener`] has seen.
#[derive(Clone, Debug, Default)]
pub struct DragEventLog {
    events: Rc<RefCell<Vec<DragEvent>>>,
}

impl DragEventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<DragEvent> {
        self.events.borrow().clone()
    }

    pub fn count(&self, event: DragEvent) -> usize {
        self.events.borrow().iter().filter(|e| **e == event).count()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    fn push(&self, event: DragEvent) {
        self.events.borrow_mut().push(event);
    }
}

#[derive(Debug)]
pub struct RecordingListener {
    log: DragEventLog,
}

impl RecordingListener {
    pub fn new(log: DragEventLog) -> Self {
        Self { log }
    }
}

impl OnDragListener for RecordingListener {
    fn on_left_drag_triggered(&mut self) {
        self.log.push(DragEvent::LeftDragTriggered);
    }

    fn on_left_drag_animation_finished(&mut self) {
        self.log.push(DragEvent::LeftDragAnimationFinished);
    }

    fn on_right_drag_triggered(&mut self) {
        self.log.push(DragEvent::RightDragTriggered);
    }

    fn on_right_drag_animation_finished(&mut self) {
        self.log.push(DragEvent::RightDragAnimationFinished);
    }
}
