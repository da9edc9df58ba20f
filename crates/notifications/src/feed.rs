use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use partnerdesk_core::NotificationId;

/// Broad category a notification belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Order,
    Billing,
    Marketing,
    System,
}

/// A notification as delivered to the partner's feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub title: String,
    pub body: String,
    pub kind: NotificationKind,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// Filter inputs of the notification center.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationQuery {
    pub search: String,
    pub kind_filter: Option<NotificationKind>,
    pub unread_only: bool,
}

impl NotificationQuery {
    fn matches(&self, n: &Notification, search_lower: &str) -> bool {
        let search_ok = search_lower.is_empty()
            || n.title.to_lowercase().contains(search_lower)
            || n.body.to_lowercase().contains(search_lower);

        search_ok
            && self.kind_filter.is_none_or(|kind| n.kind == kind)
            && (!self.unread_only || !n.read)
    }
}

/// Owns the notification list and its read state.
#[derive(Debug, Clone, Default)]
pub struct NotificationFeed {
    notifications: Vec<Notification>,
}

impl NotificationFeed {
    pub fn new(notifications: Vec<Notification>) -> Self {
        Self { notifications }
    }

    pub fn all(&self) -> &[Notification] {
        &self.notifications
    }

    /// One-pass filter, newest first.
    pub fn visible(&self, query: &NotificationQuery) -> Vec<&Notification> {
        let search_lower = query.search.trim().to_lowercase();
        let mut rows: Vec<&Notification> = self
            .notifications
            .iter()
            .filter(|n| query.matches(n, &search_lower))
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        rows
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    /// Mark one notification read. Unknown ids are a no-op, marking an
    /// already-read notification is idempotent.
    pub fn mark_read(&mut self, id: &NotificationId) {
        if let Some(n) = self.notifications.iter_mut().find(|n| &n.id == id) {
            n.read = true;
        }
    }

    pub fn mark_all_read(&mut self) {
        for n in &mut self.notifications {
            n.read = true;
        }
    }
}
