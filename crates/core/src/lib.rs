//! `partnerdesk-core` — shared domain primitives.
//!
//! This crate contains **pure domain** building blocks (no infrastructure
//! concerns): typed identifiers and the domain error taxonomy.

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::{NotificationId, ProductId};
