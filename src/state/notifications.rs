//! Header notification list: read flags and the unread badge.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use crate::data::records::Notification;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationsState {
    pub items: Vec<Notification>,
}

impl NotificationsState {
    pub fn new(items: Vec<Notification>) -> Self {
        Self { items }
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.is_read).count()
    }

    /// Badge text: `None` with nothing unread, `"9+"` past nine.
    pub fn badge_label(&self) -> Option<String> {
        match self.unread_count() {
            0 => None,
            n if n > 9 => Some("9+".to_owned()),
            n => Some(n.to_string()),
        }
    }

    pub fn mark_read(&mut self, id: &str) {
        if let Some(item) = self.items.iter_mut().find(|n| n.id == id) {
            item.is_read = true;
        }
    }

    pub fn mark_all_read(&mut self) {
        for item in &mut self.items {
            item.is_read = true;
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
