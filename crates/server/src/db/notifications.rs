//! Database operations for notifications.

use sqlx::PgPool;
use tracing::{debug, instrument};

use loftline_core::{NotificationId, UserId};

use super::RepositoryError;
use crate::models::Notification;

/// Parameters for creating a notification.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct CreateNotification {
    /// Recipient user.
    pub user_id: UserId,
    /// Short title.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Optional in-app link target.
    pub link: Option<String>,
}

/// Insert a notification.
///
/// # Errors
///
/// Returns error if the database insert fails.
#[instrument(skip(pool, params), fields(user_id = %params.user_id))]
pub async fn create_notification(
    pool: &PgPool,
    params: CreateNotification,
) -> Result<Notification, RepositoryError> {
    let notification = sqlx::query_as::<_, Notification>(
        "
        INSERT INTO notifications (user_id, title, message, link)
        VALUES ($1, $2, $3, $4)
        RETURNING id, user_id, title, message, link, is_read, created_at
        ",
    )
    .bind(params.user_id)
    .bind(&params.title)
    .bind(&params.message)
    .bind(&params.link)
    .fetch_one(pool)
    .await?;

    debug!(id = %notification.id, "Created notification");
    Ok(notification)
}

/// List a user's notifications, newest first.
///
/// # Errors
///
/// Returns error if the database query fails.
pub async fn list_notifications(
    pool: &PgPool,
    user_id: UserId,
) -> Result<Vec<Notification>, RepositoryError> {
    let notifications = sqlx::query_as::<_, Notification>(
        "
        SELECT id, user_id, title, message, link, is_read, created_at
        FROM notifications
        WHERE user_id = $1
        ORDER BY created_at DESC
        ",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(notifications)
}

/// Count a user's unread notifications.
///
/// # Errors
///
/// Returns error if the database query fails.
pub async fn unread_count(pool: &PgPool, user_id: UserId) -> Result<i64, RepositoryError> {
    let (count,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM notifications WHERE user_id = $1 AND NOT is_read",
    )
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    Ok(count)
}

/// Mark one notification as read.
///
/// # Errors
///
/// Returns `RepositoryError::NotFound` if no notification matches the ID.
#[instrument(skip(pool))]
pub async fn mark_read(pool: &PgPool, id: NotificationId) -> Result<(), RepositoryError> {
    let result = sqlx::query("UPDATE notifications SET is_read = TRUE WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(RepositoryError::NotFound);
    }

    Ok(())
}
