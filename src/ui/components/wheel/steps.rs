// src/ui/components/wheel/steps.rs
//! Deferred animation steps
//!
//! A running fling or settle re-arms one step per frame. The queue holds at
//! most one pending step; the host drains it by calling the wheel's `update`.

/// What a pending step belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepTag {
    /// Velocity driven scroll after a fling
    Fling,
    /// Snap onto an item boundary
    Settle,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StepQueue {
    pending: Option<StepTag>,
}

impl StepQueue {
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// Schedule `tag`, replacing whatever was pending
    pub fn post(&mut self, tag: StepTag) {
        self.pending = Some(tag);
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }

    pub fn take(&mut self) -> Option<StepTag> {
        self.pending.take()
    }

    pub fn pending(&self) -> Option<StepTag> {
        self.pending
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_replaces_pending() {
        let mut queue = StepQueue::new();
        queue.post(StepTag::Fling);
        queue.post(StepTag::Settle);

        assert_eq!(queue.take(), Some(StepTag::Settle));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut queue = StepQueue::new();
        queue.post(StepTag::Fling);
        queue.clear();

        assert_eq!(queue.pending(), None);
        assert_eq!(queue.take(), None);
    }
}
