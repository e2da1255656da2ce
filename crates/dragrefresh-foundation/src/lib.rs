//! Foundation elements for the drag refresh container: pointer input,
//! horizontal drag recognition and rubber-band damping.

pub mod gesture_constants;
pub mod nodes;
pub mod rubber_band;

// Re-export commonly used items
pub use dragrefresh_ui_graphics::Point;
pub use gesture_constants::*;
pub use nodes::input::dispatcher::PointerDispatcher;
pub use nodes::input::gestures::{DragDirection, DragGesture, DragStart};
pub use nodes::input::{PointerEvent, PointerEventKind};
pub use rubber_band::{damped_ratio, RubberBand};

pub mod prelude {
    pub use crate::gesture_constants::*;
    pub use crate::nodes::input::gestures::{DragDirection, DragGesture, DragStart};
    pub use crate::nodes::input::prelude::*;
    pub use crate::rubber_band::{damped_ratio, RubberBand};
}
