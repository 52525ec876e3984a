use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationVariant {
    Info,
    Destructive,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
    pub created_at: Instant,
}

/// Non-blocking toast queue. Entries expire after `ttl`.
#[derive(Debug)]
pub struct Notifications {
    items: Vec<Notification>,
    ttl: Duration,
}

impl Notifications {
    pub fn new(ttl: Duration) -> Self {
        Self {
            items: Vec::new(),
            ttl,
        }
    }

    pub fn push(&mut self, title: impl Into<String>, description: impl Into<String>, variant: NotificationVariant) {
        self.items.push(Notification {
            title: title.into(),
            description: description.into(),
            variant,
            created_at: Instant::now(),
        });
    }

    pub fn prune(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.items
            .retain(|item| now.saturating_duration_since(item.created_at) < ttl);
    }

    pub fn dismiss(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
        }
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new(Duration::from_secs(5))
    }
}
