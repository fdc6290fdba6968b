//! Transient notices and the toast queue that displays them

use std::time::{Duration, Instant};

use super::collaborators::Notifier;

/// Notification levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub level: NotifyLevel,
}

impl Notice {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            level: NotifyLevel::Info,
        }
    }

    pub fn warn(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level: NotifyLevel::Warn,
            ..Self::info(title, description)
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level: NotifyLevel::Error,
            ..Self::info(title, description)
        }
    }

    pub fn logged_out() -> Self {
        Self::info("Logged out", "You have been successfully logged out.")
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub notice: Notice,
    pub since: Instant,
}

/// Visible toasts, oldest first.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    ttl: Duration,
    max_visible: usize,
}

impl ToastQueue {
    pub fn new(ttl: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            ttl,
            max_visible: 3,
        }
    }

    pub fn push_at(&mut self, notice: Notice, now: Instant) {
        self.toasts.push(Toast { notice, since: now });
        if self.toasts.len() > self.max_visible {
            let overflow = self.toasts.len() - self.max_visible;
            self.toasts.drain(..overflow);
        }
    }

    pub fn expire(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.toasts
            .retain(|toast| now.saturating_duration_since(toast.since) < ttl);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl Notifier for ToastQueue {
    fn notify(&mut self, notice: Notice) {
        tracing::info!(title = %notice.title, "notice");
        self.push_at(notice, Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toasts_expire_after_ttl() {
        let mut queue = ToastQueue::new(Duration::from_secs(3));
        let start = Instant::now();
        queue.push_at(Notice::logged_out(), start);

        queue.expire(start + Duration::from_millis(2_999));
        assert_eq!(queue.len(), 1);

        queue.expire(start + Duration::from_secs(3));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_queue_keeps_newest() {
        let mut queue = ToastQueue::new(Duration::from_secs(3));
        let now = Instant::now();
        for i in 0..5 {
            queue.push_at(Notice::info(format!("n{i}"), ""), now);
        }
        let titles: Vec<_> = queue.iter().map(|t| t.notice.title.as_str()).collect();
        assert_eq!(titles, vec!["n2", "n3", "n4"]);
    }

    #[test]
    fn test_iter_walks_newest_first_in_reverse() {
        let mut queue = ToastQueue::new(Duration::from_secs(3));
        let now = Instant::now();
        queue.push_at(Notice::warn("config", "ignored"), now);
        queue.push_at(Notice::logged_out(), now);
        let newest = queue.iter().next_back().map(|t| t.notice.level);
        assert_eq!(newest, Some(NotifyLevel::Info));
        let levels: Vec<_> = queue.iter().rev().map(|t| t.notice.level).collect();
        assert_eq!(levels, vec![NotifyLevel::Info, NotifyLevel::Warn]);
    }
}
