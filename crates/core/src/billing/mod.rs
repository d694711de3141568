//! Pure billing domain: recurrence arithmetic and due-date classification.
//!
//! Everything here is referentially transparent. The server embeds these
//! functions in its payment-recording and alert-aggregation flows; nothing
//! in this module touches the database.
//!
//! # Modules
//!
//! - [`frequency`] - The closed set of billing frequencies
//! - [`recurrence`] - Next-due-date calculation
//! - [`alerts`] - Upcoming/overdue classification against a reference date

pub mod alerts;
pub mod frequency;
pub mod recurrence;

pub use alerts::{BillStatus, Urgency, classify};
pub use frequency::{BillFrequency, InvalidFrequency};
pub use recurrence::next_due_date;
