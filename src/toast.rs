//! Transient notifications

use dioxus::prelude::*;
use std::time::Duration;

/// Oldest notifications are dropped beyond this
const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub variant: Variant,
}

#[derive(Debug, Default)]
pub struct ToastQueue {
    items: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn push(&mut self, title: &str, description: &str, variant: Variant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast {
            id,
            title: title.to_string(),
            description: description.to_string(),
            variant,
        });
        if self.items.len() > MAX_VISIBLE {
            let overflow = self.items.len() - MAX_VISIBLE;
            self.items.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

/// Handle to the notification queue, provided by the app root
#[derive(Clone, Copy)]
pub struct Toaster {
    queue: Signal<ToastQueue>,
    lifetime: Duration,
}

impl Toaster {
    /// Must run inside a component, the queue signal belongs to its scope
    pub fn new(lifetime: Duration) -> Self {
        Self {
            queue: Signal::new(ToastQueue::default()),
            lifetime,
        }
    }

    pub fn success(mut self, title: &str, description: &str) {
        self.queue.write().push(title, description, Variant::Default);
    }

    pub fn error(mut self, title: &str, description: &str) {
        log::debug!("Notifying failure: {} - {}", title, description);
        self.queue
            .write()
            .push(title, description, Variant::Destructive);
    }

    pub fn dismiss(mut self, id: u64) {
        self.queue.write().dismiss(id);
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.queue.read().items().to_vec()
    }

    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }
}
