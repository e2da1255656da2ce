//! In-memory host container.

use dragrefresh_foundation::DragDirection;
use dragrefresh_ui::DragHost;

/// Host whose child scroll position is set by the test and which records
/// every offset it is asked to apply.
#[derive(Debug, Default, Clone)]
pub struct TestHost {
    pub can_scroll_left: bool,
    pub can_scroll_right: bool,
    pub offsets: Vec<i32>,
    pub disallow_intercept: bool,
    pub disallow_requests: usize,
}

impl TestHost {
    /// Child with nothing to scroll: both edges are available for dragging.
    pub fn new() -> Self {
        Self::default()
    }

    /// Child scrolled somewhere in the middle of its content.
    pub fn scrollable() -> Self {
        Self {
            can_scroll_left: true,
            can_scroll_right: true,
            ..Self::default()
        }
    }

    pub fn current_offset(&self) -> i32 {
        self.offsets.last().copied().unwrap_or(0)
    }
}

impl DragHost for TestHost {
    fn can_scroll_further(&self, direction: DragDirection) -> bool {
        match direction {
            DragDirection::Left => self.can_scroll_left,
            DragDirection::Right => self.can_scroll_right,
        }
    }

    fn apply_horizontal_offset(&mut self, offset: i32) {
        self.offsets.push(offset);
    }

    fn request_disallow_intercept(&mut self, disallow: bool) {
        self.disallow_intercept = disallow;
        self.disallow_requests += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_offsets_and_intercept_requests() {
        let mut host = TestHost::new();
        assert!(!host.can_scroll_further(DragDirection::Left));
        assert_eq!(host.current_offset(), 0);

        host.apply_horizontal_offset(12);
        host.apply_horizontal_offset(30);
        host.request_disallow_intercept(true);
        assert_eq!(host.current_offset(), 30);
        assert!(host.disallow_intercept);
        assert_eq!(host.disallow_requests, 1);

        assert!(TestHost::scrollable().can_scroll_further(DragDirection::Right));
    }
}
