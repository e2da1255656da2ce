//! Drag listener contract and dispatch.

use dragrefresh_foundation::DragDirection;

/// Receives edge-drag notifications.
///
/// Haptics, toasts and the actual refresh work belong here, not in the
/// controller.
pub trait OnDragListener {
    fn on_left_drag_triggered(&mut self) {}
    fn on_left_drag_animation_finished(&mut self) {}
    fn on_right_drag_triggered(&mut self) {}
    fn on_right_drag_animation_finished(&mut self) {}
}

type Callback = Box<dyn FnMut()>;

/// Closure-backed [`OnDragListener`].
///
/// ```
/// use dragrefresh_ui::DragCallbacks;
///
/// let callbacks = DragCallbacks::new()
///     .with_left_drag_triggered(|| println!("refresh from the left"))
///     .with_right_drag_triggered(|| println!("refresh from the right"));
/// # let _ = callbacks;
/// ```
#[derive(Default)]
pub struct DragCallbacks {
    left_triggered: Option<Callback>,
    left_finished: Option<Callback>,
    right_triggered: Option<Callback>,
    right_finished: Option<Callback>,
}

impl DragCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_left_drag_triggered(mut self, callback: impl FnMut() + 'static) -> Self {
        self.left_triggered = Some(Box::new(callback));
        self
    }

    pub fn with_left_drag_animation_finished(mut self, callback: impl FnMut() + 'static) -> Self {
        self.left_finished = Some(Box::new(callback));
        self
    }

    pub fn with_right_drag_triggered(mut self, callback: impl FnMut() + 'static) -> Self {
        self.right_triggered = Some(Box::new(callback));
        self
    }

    pub fn with_right_drag_animation_finished(mut self, callback: impl FnMut() + 'static) -> Self {
        self.right_finished = Some(Box::new(callback));
        self
    }
}

fn invoke(callback: &mut Option<Callback>) {
    if let Some(callback) = callback.as_mut() {
        callback();
    }
}

impl OnDragListener for DragCallbacks {
    fn on_left_drag_triggered(&mut self) {
        invoke(&mut self.left_triggered);
    }

    fn on_left_drag_animation_finished(&mut self) {
        invoke(&mut self.left_finished);
    }

    fn on_right_drag_triggered(&mut self) {
        invoke(&mut self.right_triggered);
    }

    fn on_right_drag_animation_finished(&mut self) {
        invoke(&mut self.right_finished);
    }
}

impl std::fmt::Debug for DragCallbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragCallbacks")
            .field("left_triggered", &self.left_triggered.is_some())
            .field("left_finished", &self.left_finished.is_some())
            .field("right_triggered", &self.right_triggered.is_some())
            .field("right_finished", &self.right_finished.is_some())
            .finish()
    }
}

/// Optional listener routed by direction. An empty slot swallows every
/// notification.
#[derive(Default)]
pub struct DragListenerSlot {
    listener: Option<Box<dyn OnDragListener>>,
}

impl DragListenerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, listener: Box<dyn OnDragListener>) {
        self.listener = Some(listener);
    }

    pub fn clear(&mut self) -> Option<Box<dyn OnDragListener>> {
        self.listener.take()
    }

    pub fn is_set(&self) -> bool {
        self.listener.is_some()
    }

    pub fn dispatch_triggered(&mut self, direction: DragDirection) {
        let Some(listener) = self.listener.as_mut() else {
            return;
        };
        match direction {
            DragDirection::Left => listener.on_left_drag_triggered(),
            DragDirection::Right => listener.on_right_drag_triggered(),
        }
    }

    pub fn dispatch_animation_finished(&mut self, direction: DragDirection) {
        let Some(listener) = self.listener.as_mut() else {
            return;
        };
        match direction {
            DragDirection::Left => listener.on_left_drag_animation_finished(),
            DragDirection::Right => listener.on_right_drag_animation_finished(),
        }
    }
}

impl std::fmt::Debug for DragListenerSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragListenerSlot")
            .field("is_set", &self.is_set())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/listener_tests.rs"]
mod tests;
