pub mod dispatcher;
pub mod gestures;
pub mod types;

pub use types::{PointerEvent, PointerEventKind};

pub mod prelude {
    pub use super::dispatcher::PointerDispatcher;
    pub use super::types::{PointerEvent, PointerEventKind};
}
