//! Notification handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use loftline_core::{NotificationId, UserId};

use crate::db::{self, notifications::CreateNotification};
use crate::error::AppError;
use crate::models::Notification;
use crate::state::AppState;

/// Build the notifications router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/notifications",
            get(list_notifications).post(create_notification),
        )
        .route("/api/notifications/unread-count", get(unread_count))
        .route("/api/notifications/{id}/read", post(mark_read))
}

/// Query parameters identifying the recipient.
#[derive(Debug, Deserialize)]
struct UserQuery {
    user_id: UserId,
}

/// Unread-count response.
#[derive(Debug, Serialize)]
struct UnreadCount {
    count: i64,
}

/// List a user's notifications, newest first.
#[instrument(skip(state))]
async fn list_notifications(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> Result<Json<Vec<Notification>>, AppError> {
    let notifications = db::notifications::list_notifications(state.pool(), query.user_id).await?;
    Ok(Json(notifications))
}

/// Count a user's unread notifications.
#[instrument(skip(state))]
async fn unread_count(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> Result<Json<UnreadCount>, AppError> {
    let count = db::notifications::unread_count(state.pool(), query.user_id).await?;
    Ok(Json(UnreadCount { count }))
}

/// Create a notification.
#[instrument(skip(state, payload))]
async fn create_notification(
    State(state): State<AppState>,
    Json(payload): Json<CreateNotification>,
) -> Result<(StatusCode, Json<Notification>), AppError> {
    let notification = db::notifications::create_notification(state.pool(), payload).await?;
    Ok((StatusCode::CREATED, Json(notification)))
}

/// Mark one notification as read.
#[instrument(skip(state))]
async fn mark_read(
    State(state): State<AppState>,
    Path(id): Path<NotificationId>,
) -> Result<StatusCode, AppError> {
    db::notifications::mark_read(state.pool(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
