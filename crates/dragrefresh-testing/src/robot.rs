//! Robot-style driver for gesture tests.
//!
//! Wraps a controller, a [`TestHost`] and a recording listener, and steps a
//! fake frame clock so tests read as a sequence of user actions:
//!
//! ```
//! use dragrefresh_testing::{DragEvent, GestureRobot};
//! use dragrefresh_ui::DragRefreshConfig;
//!
//! let mut robot = GestureRobot::new(DragRefreshConfig::default()).unwrap();
//! robot.press(0.0, 0.0);
//! robot.move_to(40.0, 0.0);
//! robot.move_to(104.0, 0.0);
//! robot.release();
//! robot.run_until_idle();
//! assert_eq!(
//!     robot.events(),
//!     vec![DragEvent::LeftDragTriggered, DragEvent::LeftDragAnimationFinished]
//! );
//! ```

use crate::host::TestHost;
use crate::listener::{DragEvent, DragEventLog, RecordingListener};
use dragrefresh_foundation::PointerEvent;
use dragrefresh_ui::{ConfigError, DragRefreshConfig, HorizontalDragRefresh};
use dragrefresh_ui_graphics::Point;

/// Fake frame interval (~60 FPS).
pub const FRAME_NANOS: u64 = 16_666_667;

/// Upper bound on frames `run_until_idle` will step before giving up.
const MAX_IDLE_FRAMES: usize = 1_000;

pub struct GestureRobot {
    controller: HorizontalDragRefresh,
    host: TestHost,
    log: DragEventLog,
    frame_time_nanos: u64,
    pointer: Point,
}

impl GestureRobot {
    pub fn new(config: DragRefreshConfig) -> Result<Self, ConfigError> {
        Self::with_host(config, TestHost::new())
    }

    pub fn with_host(config: DragRefreshConfig, host: TestHost) -> Result<Self, ConfigError> {
        let mut controller = HorizontalDragRefresh::new(config)?;
        let log = DragEventLog::new();
        controller.set_on_drag_listener(RecordingListener::new(log.clone()));
        Ok(Self {
            controller,
            host,
            log,
            frame_time_nanos: 0,
            pointer: Point::ZERO,
        })
    }

    pub fn controller(&self) -> &HorizontalDragRefresh {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut HorizontalDragRefresh {
        &mut self.controller
    }

    pub fn host(&self) -> &TestHost {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut TestHost {
        &mut self.host
    }

    pub fn events(&self) -> Vec<DragEvent> {
        self.log.events()
    }

    pub fn log(&self) -> &DragEventLog {
        &self.log
    }

    pub fn frame_time_nanos(&self) -> u64 {
        self.frame_time_nanos
    }

    /// Send an arbitrary event; returns whether the container claimed it.
    pub fn send(&mut self, event: PointerEvent) -> bool {
        self.pointer = event.position;
        self.controller.on_pointer_event(&mut self.host, &event)
    }

    pub fn press(&mut self, x: f32, y: f32) -> bool {
        self.send(PointerEvent::down(x, y))
    }

    pub fn move_to(&mut self, x: f32, y: f32) -> bool {
        self.send(PointerEvent::moved(x, y))
    }

    pub fn release(&mut self) -> bool {
        let Point { x, y } = self.pointer;
        self.send(PointerEvent::up(x, y))
    }

    pub fn cancel(&mut self) -> bool {
        let Point { x, y } = self.pointer;
        self.send(PointerEvent::cancel(x, y))
    }

    /// Move horizontally by `dx` from the current pointer position in `steps`
    /// equal increments.
    pub fn drag_by(&mut self, dx: f32, steps: usize) {
        let steps = steps.max(1);
        let Point { x, y } = self.pointer;
        for step in 1..=steps {
            let fraction = step as f32 / steps as f32;
            self.move_to(x + dx * fraction, y);
        }
    }

    /// Deliver one frame at the current fake time, then advance the clock.
    pub fn advance_frame(&mut self) {
        self.controller
            .on_frame(&mut self.host, self.frame_time_nanos);
        self.frame_time_nanos += FRAME_NANOS;
    }

    /// Step frames until the controller stops asking for them. Returns the
    /// number of frames delivered.
    pub fn run_until_idle(&mut self) -> usize {
        let mut frames = 0;
        while self.controller.needs_frame() && frames < MAX_IDLE_FRAMES {
            self.advance_frame();
            frames += 1;
        }
        frames
    }
}
