//! Transient notifications (toasts).

use std::fmt;

use crate::content::{LIKE_TOAST_DESCRIPTION, LIKE_TOAST_TITLE};

/// Message handed to a [`Notifier`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub duration_ms: u64,
}

impl Notification {
    /// The message shown after every like
    pub fn like(duration_ms: u64) -> Self {
        Self {
            title: LIKE_TOAST_TITLE.to_string(),
            description: LIKE_TOAST_DESCRIPTION.to_string(),
            duration_ms,
        }
    }
}

/// Anything that can display a transient message.
pub trait Notifier {
    fn show(&mut self, notification: Notification) -> ToastId;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// A live toast
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub notification: Notification,
}

/// Ordered list of visible toasts, oldest first.
///
/// Dismissal is driven by the caller, which schedules
/// [`dismiss`](ToastQueue::dismiss) after `duration_ms`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        self.toasts.push(Toast { id, notification });
        id
    }

    /// Remove a toast. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        before != self.toasts.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
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
    fn show(&mut self, notification: Notification) -> ToastId {
        self.push(notification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_notification_text() {
        let n = Notification::like(2000);
        assert_eq!(n.title, "Meow!");
        assert_eq!(n.description, "Thanks for liking cats!");
        assert_eq!(n.duration_ms, 2000);
    }

    #[test]
    fn ids_are_unique_and_dismiss_targets_one() {
        let mut queue = ToastQueue::new();
        let a = queue.show(Notification::like(2000));
        let b = queue.show(Notification::like(2000));
        assert_ne!(a, b);
        assert_eq!(queue.len(), 2);

        assert!(queue.dismiss(a));
        assert!(!queue.dismiss(a));
        let remaining: Vec<ToastId> = queue.iter().map(|t| t.id).collect();
        assert_eq!(remaining, vec![b]);
    }

    #[test]
    fn ids_not_reused_after_dismiss() {
        let mut queue = ToastQueue::new();
        let a = queue.push(Notification::like(10));
        queue.dismiss(a);
        let b = queue.push(Notification::like(10));
        assert!(b > a);
        assert!(!queue.is_empty());
    }
}
