//! Monotonic frame timestamps for hosts that do not supply their own.

use web_time::{Duration, Instant};

/// Target frame interval (~60 FPS).
pub const FRAME_INTERVAL: Duration = Duration::from_nanos(16_666_667);

/// Converts wall-clock instants into nanoseconds since the clock was created,
/// the unit [`HorizontalDragRefresh::on_frame`](crate::HorizontalDragRefresh::on_frame)
/// expects.
#[derive(Clone, Copy, Debug)]
pub struct FrameClock {
    origin: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(origin: Instant) -> Self {
        Self { origin }
    }

    pub fn nanos_at(&self, instant: Instant) -> u64 {
        let elapsed = instant.saturating_duration_since(self.origin);
        u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX)
    }

    pub fn now_nanos(&self) -> u64 {
        self.nanos_at(Instant::now())
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measures_from_origin() {
        let origin = Instant::now();
        let clock = FrameClock::starting_at(origin);
        assert_eq!(clock.nanos_at(origin), 0);
        assert_eq!(clock.nanos_at(origin + FRAME_INTERVAL), 16_666_667);
    }

    #[test]
    fn instants_before_origin_clamp_to_zero() {
        let earlier = Instant::now();
        let clock = FrameClock::starting_at(earlier + Duration::from_millis(5));
        assert_eq!(clock.nanos_at(earlier), 0);
    }
}
