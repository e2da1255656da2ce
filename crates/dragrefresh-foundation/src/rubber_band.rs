//! Rubber-band damping for edge drags.
//!
//! Distances are expressed in units of `half_max_offset`. Within one unit the
//! child follows the finger exactly; between one and three units it slows
//! along a quadratic; past three units it stops at two units. The curve is
//! continuous at both breakpoints and never decreases.

use crate::gesture_constants::{LINEAR_DRAG_RATIO, MAX_OFFSET_RATIO, TRIGGER_DRAG_RATIO};

/// Damped offset, in rubber-band units, for a drag ratio `r >= 0`.
///
/// Negative and NaN inputs are treated as zero.
pub fn damped_ratio(r: f32) -> f32 {
    if r.is_nan() || r <= 0.0 {
        0.0
    } else if r < LINEAR_DRAG_RATIO {
        r
    } else if r < TRIGGER_DRAG_RATIO {
        let d = r - LINEAR_DRAG_RATIO;
        1.0 + d - d * d / 4.0
    } else {
        MAX_OFFSET_RATIO
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RubberBand {
    half_max_offset: f32,
}

impl RubberBand {
    /// Returns `None` unless `half_max_offset` is finite and positive.
    pub fn new(half_max_offset: f32) -> Option<Self> {
        (half_max_offset.is_finite() && half_max_offset > 0.0).then_some(Self { half_max_offset })
    }

    pub fn half_max_offset(&self) -> f32 {
        self.half_max_offset
    }

    /// Visual offset for a drag distance, keeping the sign of the drag.
    pub fn damped_offset(&self, drag_distance: f32) -> f32 {
        if drag_distance == 0.0 || drag_distance.is_nan() {
            return 0.0;
        }
        let r = drag_distance.abs() / self.half_max_offset;
        damped_ratio(r) * self.half_max_offset * drag_distance.signum()
    }

    /// Whole-pixel offset, truncated toward zero.
    pub fn offset_px(&self, drag_distance: f32) -> i32 {
        self.damped_offset(drag_distance) as i32
    }

    /// Furthest the child can be displaced from rest.
    pub fn max_visual_offset(&self) -> f32 {
        MAX_OFFSET_RATIO * self.half_max_offset
    }

    /// Drag distance at which the refresh trigger fires.
    pub fn trigger_distance(&self) -> f32 {
        TRIGGER_DRAG_RATIO * self.half_max_offset
    }

    pub fn is_past_trigger(&self, drag_distance: f32) -> bool {
        drag_distance.abs() >= self.trigger_distance()
    }
}

#[cfg(test)]
#[path = "tests/rubber_band_tests.rs"]
mod tests;
