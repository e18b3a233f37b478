#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use crate::net::types::Notification;

/// Alert list for the notifications page.
#[derive(Clone, Debug, Default)]
pub struct NotificationsState {
    pub items: Vec<Notification>,
    pub loading: bool,
}

impl NotificationsState {
    pub fn load_started(&mut self) {
        self.loading = true;
    }

    pub fn load_succeeded(&mut self, items: Vec<Notification>) {
        self.items = items;
        self.loading = false;
    }

    pub fn load_failed(&mut self) {
        self.loading = false;
    }

    /// Flip the read flag after a successful PATCH against the alert.
    /// Unknown ids are ignored.
    pub fn mark_read(&mut self, id: &str) {
        if let Some(item) = self.items.iter_mut().find(|n| n.id == id) {
            item.read = true;
        }
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }
}
