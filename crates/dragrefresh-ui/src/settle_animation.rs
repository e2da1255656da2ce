//! Settle-back animation driver.
//!
//! Runs the child from wherever the gesture left it back to rest and
//! remembers what the finished gesture owes the listener.

use dragrefresh_animation::{AnimationSpec, TweenAnimation};
use dragrefresh_foundation::DragDirection;

/// How the drag that started this settle ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettleOutcome {
    pub direction: DragDirection,
    /// The trigger threshold was crossed during the gesture.
    pub triggered: bool,
    /// The gesture ended with `Up` rather than `Cancel`.
    pub released: bool,
}

impl SettleOutcome {
    /// Whether completing the settle should report "animation finished".
    pub fn should_notify(&self) -> bool {
        self.triggered && self.released
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettleFrame {
    pub offset: i32,
    pub is_finished: bool,
}

#[derive(Debug, Clone)]
pub struct SettleAnimation {
    tween: TweenAnimation<f32>,
    outcome: SettleOutcome,
}

impl SettleAnimation {
    pub fn new(start_offset: i32, spec: AnimationSpec, outcome: SettleOutcome) -> Self {
        Self {
            tween: TweenAnimation::new(start_offset as f32, 0.0, spec),
            outcome,
        }
    }

    pub fn outcome(&self) -> SettleOutcome {
        self.outcome
    }

    /// Offset for the frame at `frame_time_nanos`, truncated toward zero.
    pub fn on_frame(&mut self, frame_time_nanos: u64) -> SettleFrame {
        let frame = self.tween.on_frame(frame_time_nanos);
        SettleFrame {
            offset: if frame.is_finished {
                0
            } else {
                frame.value as i32
            },
            is_finished: frame.is_finished,
        }
    }

    /// Offset produced by the most recent frame.
    pub fn offset(&self) -> i32 {
        self.tween.value() as i32
    }

    pub fn is_finished(&self) -> bool {
        self.tween.is_finished()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dragrefresh_animation::Easing;

    const FRAME_NANOS: u64 = 16_666_667;

    fn outcome(triggered: bool, released: bool) -> SettleOutcome {
        SettleOutcome {
            direction: DragDirection::Left,
            triggered,
            released,
        }
    }

    #[test]
    fn only_released_triggered_gestures_notify() {
        assert!(outcome(true, true).should_notify());
        assert!(!outcome(true, false).should_notify());
        assert!(!outcome(false, true).should_notify());
        assert!(!outcome(false, false).should_notify());
    }

    #[test]
    fn decelerates_back_to_rest() {
        let spec = AnimationSpec::tween(300, Easing::DecelerateEasing);
        let mut settle = SettleAnimation::new(64, spec, outcome(true, true));
        let mut frame_time = 0;
        let mut offsets = vec![settle.on_frame(frame_time).offset];
        while !settle.is_finished() {
            frame_time += FRAME_NANOS;
            offsets.push(settle.on_frame(frame_time).offset);
        }

        assert_eq!(offsets.first(), Some(&64));
        assert_eq!(offsets.last(), Some(&0));
        assert!(offsets.windows(2).all(|pair| pair[0] >= pair[1]));
        // Decelerating: the first step is the largest.
        let first_step = offsets[0] - offsets[1];
        let last_step = offsets[offsets.len() - 2] - offsets[offsets.len() - 1];
        assert!(first_step > last_step);
        assert_eq!(settle.offset(), 0);
    }

    #[test]
    fn negative_offsets_settle_to_zero() {
        let mut settle =
            SettleAnimation::new(-40, AnimationSpec::linear(100), outcome(false, false));
        settle.on_frame(0);
        let mid = settle.on_frame(50_000_000);
        assert_eq!(mid.offset, -20);
        assert!(!mid.is_finished);
        let end = settle.on_frame(100_000_000);
        assert_eq!(
            end,
            SettleFrame {
                offset: 0,
                is_finished: true
            }
        );
    }
}
