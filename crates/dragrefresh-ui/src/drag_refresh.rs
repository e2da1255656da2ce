//! Horizontal drag-to-refresh controller.
//!
//! `HorizontalDragRefresh` turns a single pointer stream into edge drags of
//! the container's only child:
//!
//! - `Idle`: pointer presses are recorded; moves are classified by
//!   [`DragGesture`] against the touch slop and the child's scroll position.
//! - `Dragging`: moves are clamped to the drag's side, damped by the
//!   [`RubberBand`] and applied to the child. Crossing the trigger distance
//!   notifies the listener once per gesture.
//! - `Settling`: after `Up`/`Cancel`, frames drive the child back to rest.
//!   Completion returns to `Idle` and, for released triggered drags, reports
//!   "animation finished".
//!
//! The controller owns no clock and no view. Hosts feed it pointer events
//! and frame timestamps, and receive offsets through [`DragHost`].

use crate::config::{ConfigError, DragRefreshConfig};
use crate::host::DragHost;
use crate::listener::{DragListenerSlot, OnDragListener};
use crate::settle_animation::{SettleAnimation, SettleOutcome};
use dragrefresh_animation::AnimationSpec;
use dragrefresh_foundation::{
    DragDirection, DragGesture, PointerEvent, PointerEventKind, RubberBand,
};
use dragrefresh_ui_graphics::{EdgeInsets, Point, Rect, Size};

/// Phase of the container's gesture handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureState {
    Idle,
    Dragging,
    Settling,
}

/// Single-child container that lets its child be pulled past either
/// horizontal edge and springs it back on release.
pub struct HorizontalDragRefresh {
    config: DragRefreshConfig,
    rubber_band: RubberBand,
    gesture: DragGesture,
    settle_spec: AnimationSpec,
    disabled: bool,
    state: GestureState,
    direction: Option<DragDirection>,
    /// X position drag distances are measured from.
    motion_x: f32,
    /// Clamped, undamped drag distance of the latest move.
    drag_distance: f32,
    child_offset: i32,
    drag_trigger_sent: bool,
    settle: Option<SettleAnimation>,
    listener: DragListenerSlot,
}

impl HorizontalDragRefresh {
    pub fn new(config: DragRefreshConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rubber_band = RubberBand::new(config.half_max_offset()).ok_or(
            ConfigError::NonPositiveMaxDragDistance {
                value: config.max_drag_distance_px(),
            },
        )?;
        Ok(Self {
            config,
            rubber_band,
            gesture: DragGesture::new(config.touch_slop),
            settle_spec: config.settle_animation,
            disabled: false,
            state: GestureState::Idle,
            direction: None,
            motion_x: 0.0,
            drag_distance: 0.0,
            child_offset: 0,
            drag_trigger_sent: false,
            settle: None,
            listener: DragListenerSlot::new(),
        })
    }

    pub fn config(&self) -> &DragRefreshConfig {
        &self.config
    }

    /// While disabled, pointer events pass through untouched. A drag that was
    /// already recognised is left where it is; it resumes on re-enable.
    pub fn set_disabled(&mut self, disabled: bool) {
        if disabled && self.state == GestureState::Dragging {
            log::debug!("disabled mid-drag at offset {}", self.child_offset);
        }
        self.disabled = disabled;
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_on_drag_listener(&mut self, listener: impl OnDragListener + 'static) {
        self.listener.set(Box::new(listener));
    }

    pub fn remove_on_drag_listener(&mut self) -> Option<Box<dyn OnDragListener>> {
        self.listener.clear()
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Direction of the current drag or settle; `None` while idle.
    pub fn drag_direction(&self) -> Option<DragDirection> {
        self.direction
    }

    pub fn child_offset(&self) -> i32 {
        self.child_offset
    }

    pub fn drag_distance(&self) -> f32 {
        self.drag_distance
    }

    /// Whether the trigger has fired during the current gesture.
    pub fn is_drag_triggered(&self) -> bool {
        self.drag_trigger_sent
    }

    pub fn rubber_band(&self) -> RubberBand {
        self.rubber_band
    }

    pub fn touch_slop(&self) -> f32 {
        self.gesture.touch_slop()
    }

    /// Whether a settle is running and the host should keep sending frames.
    pub fn needs_frame(&self) -> bool {
        self.settle.is_some()
    }

    /// Feed one pointer event. Returns `true` (and consumes the event) when
    /// the container claims it for the drag.
    pub fn on_pointer_event(&mut self, host: &mut dyn DragHost, event: &PointerEvent) -> bool {
        if self.disabled {
            return false;
        }

        let handled = match event.kind {
            PointerEventKind::Down => {
                self.on_down(host, event.position);
                false
            }
            PointerEventKind::Move => match self.state {
                GestureState::Idle => self.try_start_drag(host, event.position),
                GestureState::Dragging => {
                    self.drag_to(host, event.position.x);
                    true
                }
                GestureState::Settling => false,
            },
            kind if kind.is_terminal() => self.on_release(host, kind == PointerEventKind::Up),
            _ => false,
        };

        if handled {
            event.consume();
        }
        handled
    }

    /// Advance the settle animation to `frame_time_nanos`.
    pub fn on_frame(&mut self, host: &mut dyn DragHost, frame_time_nanos: u64) {
        let Some(settle) = self.settle.as_mut() else {
            return;
        };
        let frame = settle.on_frame(frame_time_nanos);
        let outcome = settle.outcome();
        log::trace!("settle frame offset {}", frame.offset);
        self.move_child_to(host, frame.offset);

        if frame.is_finished {
            self.settle = None;
            self.state = GestureState::Idle;
            self.direction = None;
            self.drag_distance = 0.0;
            log::debug!("settle finished, state idle");
            if outcome.should_notify() {
                self.listener.dispatch_animation_finished(outcome.direction);
            }
        }
    }

    /// Bounds of the child inside a container of `container` size: the padded
    /// content box shifted by the current offset.
    pub fn child_bounds(&self, container: Size, padding: EdgeInsets) -> Rect {
        let size = Size::new(
            (container.width - padding.horizontal_sum()).max(0.0),
            (container.height - padding.vertical_sum()).max(0.0),
        );
        Rect::from_origin_size(
            Point::new(padding.left + self.child_offset as f32, padding.top),
            size,
        )
    }

    fn on_down(&mut self, host: &mut dyn DragHost, position: Point) {
        match self.state {
            GestureState::Idle => {}
            GestureState::Settling => {
                // The cancelled settle never reports "animation finished".
                log::debug!("press during settle, snapping child to rest");
                self.settle = None;
                self.state = GestureState::Idle;
                self.direction = None;
                self.drag_distance = 0.0;
                self.move_child_to(host, 0);
            }
            GestureState::Dragging => {
                log::warn!("press while already dragging; keeping the current drag");
            }
        }
        self.gesture.press(position);
        // A drag fires its trigger at most once, even across stray presses.
        if self.state == GestureState::Idle {
            self.drag_trigger_sent = false;
        }
    }

    fn try_start_drag(&mut self, host: &mut dyn DragHost, position: Point) -> bool {
        let Some(start) = self
            .gesture
            .classify(position, |direction| host.can_scroll_further(direction))
        else {
            return false;
        };

        log::debug!(
            "start dragging {:?}, reference x {}",
            start.direction,
            start.reference_x
        );
        self.state = GestureState::Dragging;
        self.direction = Some(start.direction);
        self.motion_x = start.reference_x;
        self.drag_distance = 0.0;
        host.request_disallow_intercept(true);
        true
    }

    fn drag_to(&mut self, host: &mut dyn DragHost, x: f32) {
        let Some(direction) = self.direction else {
            return;
        };
        let dx = direction.clamp_drag(x - self.motion_x);
        self.drag_distance = dx;
        let offset = self.rubber_band.offset_px(dx);
        log::trace!("drag distance {dx}, child offset {offset}");
        self.move_child_to(host, offset);

        if self.rubber_band.is_past_trigger(dx) && !self.drag_trigger_sent {
            self.drag_trigger_sent = true;
            log::debug!("{direction:?} drag triggered");
            self.listener.dispatch_triggered(direction);
        }
    }

    fn on_release(&mut self, host: &mut dyn DragHost, released: bool) -> bool {
        if self.state != GestureState::Dragging {
            return false;
        }
        let Some(direction) = self.direction else {
            return false;
        };

        let outcome = SettleOutcome {
            direction,
            triggered: self.drag_trigger_sent,
            released,
        };
        log::debug!(
            "{} while dragging, settling from {}",
            if released { "up" } else { "cancel" },
            self.child_offset
        );
        self.state = GestureState::Settling;
        self.settle = Some(SettleAnimation::new(
            self.child_offset,
            self.settle_spec,
            outcome,
        ));
        host.request_disallow_intercept(false);
        true
    }

    fn move_child_to(&mut self, host: &mut dyn DragHost, target: i32) {
        if target != self.child_offset {
            self.child_offset = target;
            host.apply_horizontal_offset(target);
        }
    }
}

impl std::fmt::Debug for HorizontalDragRefresh {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HorizontalDragRefresh")
            .field("state", &self.state)
            .field("direction", &self.direction)
            .field("child_offset", &self.child_offset)
            .field("drag_distance", &self.drag_distance)
            .field("drag_trigger_sent", &self.drag_trigger_sent)
            .field("disabled", &self.disabled)
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/drag_refresh_tests.rs"]
mod tests;
