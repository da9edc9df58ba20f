//! HTTP application wiring (Axum router + shared state).
//!
//! Folder layout:
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: query-string mapping and response DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};

use partnerdesk_catalog::Product;
use partnerdesk_notifications::{Notification, NotificationFeed};

pub mod dto;
pub mod errors;
pub mod routes;

/// In-memory data the facade serves. Stands in for whatever backend the
/// portal eventually talks to.
#[derive(Debug)]
pub struct AppState {
    pub products: Vec<Product>,
    pub feed: NotificationFeed,
}

impl AppState {
    pub fn new(products: Vec<Product>, notifications: Vec<Notification>) -> Self {
        Self {
            products,
            feed: NotificationFeed::new(notifications),
        }
    }
}

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(Extension(Arc::new(state)))
}
