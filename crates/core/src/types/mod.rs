//! Shared type definitions.
//!
//! # Modules
//!
//! - [`id`] - Type-safe UUID newtypes for entity references
//! - [`status`] - Wire enums for loft and transaction states
//! - [`utility`] - Utility types (water, energy, phone, internet)

pub mod id;
pub mod status;
pub mod utility;

pub use id::*;
pub use status::*;
pub use utility::*;
