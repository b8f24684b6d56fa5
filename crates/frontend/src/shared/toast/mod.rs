//! Transient success/error notifications
//!
//! `ToastQueue` is plain data; `ToastService` puts it in a signal and owns the
//! auto-dismiss timers; `ToastContainer` renders whatever is queued.

pub mod container;
pub mod service;

pub use container::ToastContainer;
pub use service::ToastService;

use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub fn css_modifier(&self) -> &'static str {
        match self {
            NotificationKind::Success => "toast--success",
            NotificationKind::Error => "toast--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }
}

/// Anything that can surface a notification to the operator
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub notification: Notification,
}

/// Toasts currently on screen, oldest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, notification: Notification) -> Uuid {
        let id = Uuid::new_v4();
        self.toasts.push(Toast { id, notification });
        id
    }

    /// Returns false when the toast was already gone (clicked away before
    /// its timer fired).
    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_order() {
        let mut queue = ToastQueue::default();
        queue.push(Notification::success("Subcategory Added!"));
        queue.push(Notification::error("Error: HTTP 500"));

        let kinds: Vec<_> = queue.toasts().iter().map(|t| t.notification.kind).collect();
        assert_eq!(kinds, vec![NotificationKind::Success, NotificationKind::Error]);
    }

    #[test]
    fn test_dismiss_only_once() {
        let mut queue = ToastQueue::default();
        let first = queue.push(Notification::success("one"));
        let second = queue.push(Notification::success("two"));

        assert!(queue.dismiss(first));
        assert!(!queue.dismiss(first));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.toasts()[0].id, second);
    }

    #[test]
    fn test_queue_empties_after_last_dismiss() {
        let mut queue = ToastQueue::default();
        assert!(queue.is_empty());

        let id = queue.push(Notification::error("Please select a Category!"));
        assert!(!queue.is_empty());

        queue.dismiss(id);
        assert!(queue.is_empty());
    }
}
