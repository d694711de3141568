//! Loftline Core - Shared types and billing domain.
//!
//! This crate provides the common types used across all Loftline components:
//! - `server` - JSON API for lofts, bills, transactions, and notifications
//! - `cli` - Command-line tools for migrations and seeding
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! database access, no HTTP clients. This keeps it lightweight and allows it
//! to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, statuses, and utilities
//! - [`billing`] - Bill recurrence calculation and due-date classification

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod billing;
pub mod types;

pub use billing::*;
pub use types::*;
