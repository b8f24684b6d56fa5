use super::{Notification, Notifier, ToastQueue};
use crate::shared::config::TOAST_AUTO_CLOSE_MS;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

/// Global toast layer, provided once through context by the app root.
#[derive(Clone, Copy)]
pub struct ToastService {
    queue: RwSignal<ToastQueue>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
        }
    }

    pub fn queue(&self) -> ReadSignal<ToastQueue> {
        self.queue.read_only()
    }

    pub fn dismiss(&self, id: Uuid) {
        self.queue.update(|q| {
            q.dismiss(id);
        });
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ToastService {
    fn notify(&self, notification: Notification) {
        log::debug!("toast {:?}: {}", notification.kind, notification.message);
        let Some(id) = self.queue.try_update(|q| q.push(notification)) else {
            return;
        };
        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_AUTO_CLOSE_MS).await;
            svc.dismiss(id);
        });
    }
}
