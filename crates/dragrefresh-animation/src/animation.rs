//! Time-based animations with easing curves.
//!
//! Animations here do not own a clock. The host feeds frame timestamps into
//! [`TweenAnimation::on_frame`] and applies the returned value, so the same
//! code runs under a real vsync loop, a timer, or a test that steps frames by
//! hand.

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

/// Easing functions applied to the linear progress of a tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// Linear interpolation (no easing).
    LinearEasing,
    /// Quadratic deceleration, `1 - (1 - t)^2`.
    ///
    /// Fast initial motion that slows to a stop. This is the curve Android's
    /// `DecelerateInterpolator` produces with its default factor.
    DecelerateEasing,
}

impl Easing {
    /// Apply the easing function to a linear fraction [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Easing::LinearEasing => fraction,
            Easing::DecelerateEasing => {
                let fraction = fraction.clamp(0.0, 1.0);
                let remaining = 1.0 - fraction;
                1.0 - remaining * remaining
            }
        }
    }
}

/// Animation specification combining duration and easing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    /// Easing function to apply.
    pub easing: Easing,
}

impl AnimationSpec {
    /// Create a tween animation with duration and easing.
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
        }
    }

    /// Create a linear tween animation.
    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::LinearEasing)
    }
}

/// Value produced by one frame of a [`TweenAnimation`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationFrame<T> {
    pub value: T,
    pub is_finished: bool,
}

/// A tween between two values, advanced by externally supplied frame times.
///
/// The first frame pins the start time, so an animation created between
/// frames always begins at its start value.
#[derive(Debug, Clone)]
pub struct TweenAnimation<T: Lerp + Clone> {
    start: T,
    target: T,
    current: T,
    spec: AnimationSpec,
    start_time_nanos: Option<u64>,
    finished: bool,
}

impl<T: Lerp + Clone> TweenAnimation<T> {
    pub fn new(start: T, target: T, spec: AnimationSpec) -> Self {
        Self {
            current: start.clone(),
            start,
            target,
            spec,
            start_time_nanos: None,
            finished: false,
        }
    }

    /// Advance to `frame_time_nanos` and return the value for that frame.
    ///
    /// Once finished, further frames keep returning the target.
    pub fn on_frame(&mut self, frame_time_nanos: u64) -> AnimationFrame<T> {
        if self.finished {
            return AnimationFrame {
                value: self.target.clone(),
                is_finished: true,
            };
        }

        let start_time = *self.start_time_nanos.get_or_insert(frame_time_nanos);
        let elapsed_nanos = frame_time_nanos.saturating_sub(start_time);
        let duration_nanos = self.spec.duration_millis.saturating_mul(1_000_000).max(1);
        let linear_progress = (elapsed_nanos as f32 / duration_nanos as f32).clamp(0.0, 1.0);

        if linear_progress >= 1.0 || self.spec.duration_millis == 0 {
            self.current = self.target.clone();
            self.finished = true;
            log::trace!("tween finished after {elapsed_nanos}ns");
        } else {
            let progress = self.spec.easing.transform(linear_progress);
            self.current = self.start.lerp(&self.target, progress);
        }

        AnimationFrame {
            value: self.current.clone(),
            is_finished: self.finished,
        }
    }

    /// Value produced by the most recent frame (the start value before any).
    pub fn value(&self) -> T {
        self.current.clone()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
