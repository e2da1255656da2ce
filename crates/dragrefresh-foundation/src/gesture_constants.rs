//! Shared gesture constants for the drag refresh container.
//!
//! All distances are in logical pixels unless the name says otherwise.
//!
//! # DPI Considerations
//!
//! The touch slop is a fixed logical-pixel value. Hosts running on very
//! high-density touch screens should pass their platform's scaled slop
//! through the container configuration instead.

/// Drag threshold (touch slop) in logical pixels.
///
/// A horizontal drag is only recognised once the pointer has travelled at
/// least this far from the press position. Matches Android's
/// `ViewConfiguration` touch slop of ~8dp at baseline density.
pub const DRAG_THRESHOLD: f32 = 8.0;

/// Default maximum drag distance in density-independent pixels.
///
/// The container halves this into the rubber-band unit, so the child never
/// travels further than this value from rest.
pub const DEFAULT_MAX_DRAG_DISTANCE_DP: f32 = 64.0;

/// Ratio (in rubber-band units) below which the child tracks the pointer 1:1.
pub const LINEAR_DRAG_RATIO: f32 = 1.0;

/// Ratio (in rubber-band units) at which the damped offset saturates and the
/// refresh trigger fires.
pub const TRIGGER_DRAG_RATIO: f32 = 3.0;

/// Saturated visual offset, in rubber-band units.
pub const MAX_OFFSET_RATIO: f32 = 2.0;

/// Default settle-back duration in milliseconds.
///
/// Android's `ValueAnimator` default, which the original container relied on.
pub const SETTLE_DURATION_MILLIS: u64 = 300;
