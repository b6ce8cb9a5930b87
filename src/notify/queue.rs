use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use tracing::debug;

use super::{Notifier, Toast};
use crate::config::ToastConfig;

#[derive(Debug, Clone)]
pub struct ActiveToast {
    pub toast: Toast,
    shown_at: Instant,
    ttl: Duration,
}

impl ActiveToast {
    fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.ttl
    }
}

/// Toasts currently on screen, oldest first.
///
/// Each toast disappears once its time-to-live has passed. When more than
/// `max_visible` are shown at once the oldest one is dropped.
#[derive(Debug)]
pub struct ToastQueue {
    toasts: Mutex<VecDeque<ActiveToast>>,
    ttl: Duration,
    max_visible: usize,
}

impl ToastQueue {
    pub fn new(ttl: Duration, max_visible: usize) -> Self {
        Self {
            toasts: Mutex::new(VecDeque::new()),
            ttl,
            max_visible: max_visible.max(1),
        }
    }

    pub fn from_config(config: &ToastConfig) -> Self {
        Self::new(config.duration(), config.max_visible)
    }

    pub fn visible(&self) -> Vec<Toast> {
        let now = Instant::now();
        self.lock()
            .iter()
            .filter(|active| !active.is_expired_at(now))
            .map(|active| active.toast.clone())
            .collect()
    }

    pub fn clear_expired(&self) {
        self.clear_expired_at(Instant::now());
    }

    fn clear_expired_at(&self, now: Instant) {
        self.lock().retain(|active| !active.is_expired_at(now));
    }

    /// Number of toasts still on screen. Expired ones are not counted.
    pub fn len(&self) -> usize {
        self.len_at(Instant::now())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn len_at(&self, now: Instant) -> usize {
        self.lock()
            .iter()
            .filter(|active| !active.is_expired_at(now))
            .count()
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<ActiveToast>> {
        // A panic while holding the lock cannot leave the deque half-updated.
        self.toasts.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Notifier for ToastQueue {
    fn show(&self, toast: Toast) {
        debug!(text = %toast.text, "showing toast");
        let mut toasts = self.lock();
        toasts.push_back(ActiveToast {
            toast,
            shown_at: Instant::now(),
            ttl: self.ttl,
        });
        while toasts.len() > self.max_visible {
            toasts.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_show_adds_visible_toast() {
        let queue = ToastQueue::new(Duration::from_secs(60), 3);
        queue.show(Toast::copied("Copied to clipboard"));

        assert_eq!(queue.visible(), vec![Toast::copied("Copied to clipboard")]);
    }

    #[test]
    fn test_oldest_toast_dropped_past_max_visible() {
        let queue = ToastQueue::new(Duration::from_secs(60), 2);
        queue.show(Toast::new("one"));
        queue.show(Toast::new("two"));
        queue.show(Toast::new("three"));

        let texts: Vec<String> = queue.visible().into_iter().map(|t| t.text).collect();
        assert_eq!(texts, vec!["two", "three"]);
    }

    #[test]
    fn test_zero_max_visible_still_shows_latest() {
        let queue = ToastQueue::new(Duration::from_secs(60), 0);
        queue.show(Toast::new("one"));
        queue.show(Toast::new("two"));

        assert_eq!(queue.visible(), vec![Toast::new("two")]);
    }

    #[test]
    fn test_expired_toasts_are_hidden_and_cleared() {
        let queue = ToastQueue::new(Duration::from_millis(500), 3);
        queue.show(Toast::new("short lived"));
        assert_eq!(queue.len(), 1);

        queue.clear_expired_at(Instant::now() + Duration::from_millis(100));
        assert_eq!(queue.lock().len(), 1);

        queue.clear_expired_at(Instant::now() + Duration::from_secs(1));
        assert!(queue.lock().is_empty());
    }

    #[test]
    fn test_zero_ttl_is_never_visible() {
        let queue = ToastQueue::new(Duration::ZERO, 3);
        queue.show(Toast::new("gone"));
        assert!(queue.visible().is_empty());
        assert_eq!(queue.len(), 0);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_len_ignores_expired_toasts_before_clearing() {
        let queue = ToastQueue::new(Duration::from_millis(500), 3);
        queue.show(Toast::new("expires"));

        let later = Instant::now() + Duration::from_secs(1);
        assert_eq!(queue.len_at(later), 0);
        // Not yet cleared, only hidden
        assert_eq!(queue.lock().len(), 1);
    }
}
