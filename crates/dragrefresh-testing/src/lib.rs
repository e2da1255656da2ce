//! Testing utilities and harness for the drag refresh container

pub mod host;
pub mod listener;
pub mod robot;

// Re-export testing utilities
pub use host::TestHost;
pub use listener::{DragEvent, DragEventLog, RecordingListener};
pub use robot::{GestureRobot, FRAME_NANOS};

pub mod prelude {
    pub use crate::host::TestHost;
    pub use crate::listener::{DragEvent, DragEventLog, RecordingListener};
    pub use crate::robot::*;
}
