//! Row models for the API.

pub mod loft;
pub mod notification;
pub mod transaction;

pub use loft::{CreateLoft, Loft, UpdateLoft};
pub use notification::Notification;
pub use transaction::Transaction;
