//! Notification feed core.
//!
//! Same pipeline shape as the product list at a fraction of the complexity:
//! one filter pass, newest-first order, read-state transitions. Pure
//! in-memory logic, no IO.

pub mod feed;

pub use feed::{Notification, NotificationFeed, NotificationKind, NotificationQuery};
