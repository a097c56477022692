// src/state/notification.rs
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
    pub created: Instant,
}

/// Short-lived messages shown in the corner of the window.
#[derive(Debug)]
pub struct Notifications {
    items: Vec<Notification>,
    lifetime: Duration,
    next_id: u64,
}

impl Notifications {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            items: Vec::new(),
            lifetime,
            next_id: 0,
        }
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(NotificationKind::Success, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(NotificationKind::Error, message.into());
    }

    fn push(&mut self, kind: NotificationKind, message: String) {
        self.items.push(Notification {
            id: self.next_id,
            kind,
            message,
            created: Instant::now(),
        });
        self.next_id += 1;
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }

    pub fn expire(&mut self, now: Instant) {
        let lifetime = self.lifetime;
        self.items.retain(|n| now.saturating_duration_since(n.created) < lifetime);
    }

    pub fn active(&self) -> &[Notification] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
