//! Horizontal drag-to-refresh container.
//!
//! The container lets the user pull its single child sideways once the child
//! cannot scroll any further, rubber-bands the pull, reports a refresh
//! trigger, and animates the child back to rest.

pub mod config;
pub mod drag_refresh;
pub mod frame_clock;
pub mod host;
pub mod listener;
pub mod settle_animation;

pub use config::{ConfigError, DragRefreshConfig, MaxDragDistance};
pub use drag_refresh::{GestureState, HorizontalDragRefresh};
pub use dragrefresh_foundation::{DragDirection, PointerEvent, PointerEventKind};
pub use frame_clock::{FrameClock, FRAME_INTERVAL};
pub use host::DragHost;
pub use listener::{DragCallbacks, DragListenerSlot, OnDragListener};
pub use settle_animation::{SettleAnimation, SettleFrame, SettleOutcome};

pub mod prelude {
    pub use crate::config::{DragRefreshConfig, MaxDragDistance};
    pub use crate::drag_refresh::{GestureState, HorizontalDragRefresh};
    pub use crate::host::DragHost;
    pub use crate::listener::{DragCallbacks, OnDragListener};
    pub use dragrefresh_foundation::prelude::*;
}
