//! Notification row model.

use chrono::{DateTime, Utc};
use serde::Serialize;

use loftline_core::{NotificationId, UserId};

/// A per-user notification.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Notification {
    /// Unique notification ID.
    pub id: NotificationId,
    /// Recipient (a managed-platform auth user).
    pub user_id: UserId,
    /// Short title.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Optional in-app link target.
    pub link: Option<String>,
    /// Whether the recipient has read it.
    pub is_read: bool,
    /// When the notification was created.
    pub created_at: DateTime<Utc>,
}
