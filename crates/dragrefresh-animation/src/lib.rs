//! Animation primitives for the drag refresh container.
//!
//! This crate provides easing curves and a caller-driven tween that the
//! settle-back animation is built on.

pub mod animation;

// Re-export animation system
pub use animation::*;

pub mod prelude {
    pub use crate::animation::{AnimationFrame, AnimationSpec, Easing, Lerp, TweenAnimation};
}
