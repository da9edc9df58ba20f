use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use partnerdesk_catalog::query;
use partnerdesk_core::DomainError;

use crate::app::{dto, errors, AppState};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products))
        .route("/:id", get(get_product))
}

pub async fn list_products(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<dto::ProductListParams>,
) -> impl IntoResponse {
    let product_query = params.into_query();
    let outcome = query::run(&state.products, &product_query);

    tracing::debug!(
        total = outcome.total,
        page = outcome.page,
        "served product list"
    );

    Json(dto::ProductListResponse {
        items: outcome.items.into_iter().cloned().collect(),
        total: outcome.total,
        page: outcome.page,
        page_count: outcome.page_count,
    })
}

pub async fn get_product(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match state.products.iter().find(|p| p.id.as_str() == id) {
        Some(product) => Json(product.clone()).into_response(),
        None => errors::domain_error_to_response(DomainError::not_found()),
    }
}
