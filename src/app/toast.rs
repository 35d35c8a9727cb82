//! Transient notification queue for user feedback.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

pub const TOAST_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone)]
pub struct Toast {
    pub title: String,
    pub body: String,
    deadline: Instant,
}

#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, title: impl Into<String>, body: impl Into<String>) {
        self.toasts.push_back(Toast {
            title: title.into(),
            body: body.into(),
            deadline: Instant::now() + TOAST_TTL,
        });
    }

    /// Drop expired toasts. Called once per tick.
    pub fn prune(&mut self) {
        self.prune_at(Instant::now());
    }

    fn prune_at(&mut self, now: Instant) {
        self.toasts.retain(|t| t.deadline > now);
    }

    /// The toast to display: the most recent live one.
    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.back()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_returns_most_recent() {
        let mut q = ToastQueue::default();
        assert!(q.latest().is_none());
        q.push("First", "a");
        q.push("Second", "b");
        assert_eq!(q.latest().unwrap().title, "Second");
    }

    #[test]
    fn prune_drops_only_expired() {
        let mut q = ToastQueue::default();
        q.push("Old", "a");
        q.push("New", "b");
        // expire only the first toast
        let split = q.toasts[0].deadline + Duration::from_millis(1);
        q.toasts[1].deadline = split + TOAST_TTL;
        q.prune_at(split);
        assert_eq!(q.toasts.len(), 1);
        assert_eq!(q.latest().unwrap().title, "New");
    }
}
