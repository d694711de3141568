//! Business logic services.
//!
//! # Services
//!
//! - `bills` - Bill alert aggregation and payment recording

pub mod bills;

pub use bills::{BillAlert, BillAlerts, BillService, MarkBillPaid, PaymentRecorded};
