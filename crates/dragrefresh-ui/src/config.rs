//! Container configuration.

use dragrefresh_animation::{AnimationSpec, Easing};
use dragrefresh_foundation::{DEFAULT_MAX_DRAG_DISTANCE_DP, DRAG_THRESHOLD, SETTLE_DURATION_MILLIS};
use dragrefresh_ui_graphics::{Dp, Px};
use std::fmt;

/// Maximum distance the child may be dragged from rest.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MaxDragDistance {
    /// Scaled by the configured density.
    Dp(Dp),
    /// Already in device pixels.
    Px(Px),
}

impl MaxDragDistance {
    pub fn to_px(&self, density: f32) -> f32 {
        match self {
            MaxDragDistance::Dp(dp) => dp.to_px(density),
            MaxDragDistance::Px(px) => px.0,
        }
    }
}

impl Default for MaxDragDistance {
    fn default() -> Self {
        MaxDragDistance::Dp(Dp(DEFAULT_MAX_DRAG_DISTANCE_DP))
    }
}

/// Options for [`HorizontalDragRefresh`](crate::HorizontalDragRefresh).
///
/// ```
/// use dragrefresh_ui::{DragRefreshConfig, MaxDragDistance};
/// use dragrefresh_ui_graphics::Dp;
///
/// let config = DragRefreshConfig::default()
///     .with_density(2.0)
///     .with_max_drag_distance(MaxDragDistance::Dp(Dp(80.0)));
/// assert_eq!(config.max_drag_distance_px(), 160.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragRefreshConfig {
    pub max_drag_distance: MaxDragDistance,
    /// Device pixels per density-independent pixel.
    pub density: f32,
    /// Minimum horizontal travel, in pixels, before a drag is recognised.
    pub touch_slop: f32,
    /// Curve and duration of the return to rest.
    pub settle_animation: AnimationSpec,
}

impl Default for DragRefreshConfig {
    fn default() -> Self {
        Self {
            max_drag_distance: MaxDragDistance::default(),
            density: 1.0,
            touch_slop: DRAG_THRESHOLD,
            settle_animation: AnimationSpec::tween(
                SETTLE_DURATION_MILLIS,
                Easing::DecelerateEasing,
            ),
        }
    }
}

impl DragRefreshConfig {
    pub fn with_max_drag_distance(mut self, max_drag_distance: MaxDragDistance) -> Self {
        self.max_drag_distance = max_drag_distance;
        self
    }

    pub fn with_density(mut self, density: f32) -> Self {
        self.density = density;
        self
    }

    pub fn with_touch_slop(mut self, touch_slop: f32) -> Self {
        self.touch_slop = touch_slop;
        self
    }

    pub fn with_settle_animation(mut self, settle_animation: AnimationSpec) -> Self {
        self.settle_animation = settle_animation;
        self
    }

    pub fn max_drag_distance_px(&self) -> f32 {
        self.max_drag_distance.to_px(self.density)
    }

    /// Half the maximum drag distance: the rubber-band unit.
    pub fn half_max_offset(&self) -> f32 {
        self.max_drag_distance_px() / 2.0
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.density.is_finite() && self.density > 0.0) {
            return Err(ConfigError::NonPositiveDensity {
                value: self.density,
            });
        }
        let max_drag_distance = self.max_drag_distance_px();
        if !(max_drag_distance.is_finite() && max_drag_distance > 0.0) {
            return Err(ConfigError::NonPositiveMaxDragDistance {
                value: max_drag_distance,
            });
        }
        if !(self.touch_slop.is_finite() && self.touch_slop > 0.0) {
            return Err(ConfigError::NonPositiveTouchSlop {
                value: self.touch_slop,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    NonPositiveMaxDragDistance { value: f32 },
    NonPositiveDensity { value: f32 },
    NonPositiveTouchSlop { value: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositiveMaxDragDistance { value } => {
                write!(f, "max drag distance must be positive, got {value}px")
            }
            ConfigError::NonPositiveDensity { value } => {
                write!(f, "density must be positive, got {value}")
            }
            ConfigError::NonPositiveTouchSlop { value } => {
                write!(f, "touch slop must be positive, got {value}px")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
