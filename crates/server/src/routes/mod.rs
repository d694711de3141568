//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                                  - Liveness check
//! GET  /health/ready                            - Readiness check (DB ping)
//!
//! # Lofts
//! GET    /api/lofts                             - List lofts
//! POST   /api/lofts                             - Create loft
//! GET    /api/lofts/{id}                        - Loft detail
//! PUT    /api/lofts/{id}                        - Update loft
//! DELETE /api/lofts/{id}                        - Delete loft
//!
//! # Bills
//! GET  /api/bills/alerts                        - Upcoming + overdue alerts
//! POST /api/lofts/{id}/bills/{utility}/pay      - Mark bill as paid
//!
//! # Transactions
//! GET  /api/transactions                        - List (optionally ?loft_id=)
//! POST /api/transactions                        - Record transaction
//!
//! # Notifications
//! GET  /api/notifications?user_id=              - List for user
//! GET  /api/notifications/unread-count?user_id= - Unread count
//! POST /api/notifications                       - Create notification
//! POST /api/notifications/{id}/read             - Mark as read
//! ```

use axum::Router;

use crate::state::AppState;

pub mod bills;
pub mod lofts;
pub mod notifications;
pub mod transactions;

/// Build the API router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(lofts::router())
        .merge(bills::router())
        .merge(transactions::router())
        .merge(notifications::router())
}
