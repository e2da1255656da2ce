pub mod drag;

pub use drag::{DragDirection, DragGesture, DragStart};
