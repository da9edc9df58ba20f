use axum::Router;

pub mod notifications;
pub mod products;
pub mod system;

/// Router for the read-only list endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/products", products::router())
        .nest("/notifications", notifications::router())
}
