use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::app::{dto, AppState};

pub fn router() -> Router {
    Router::new().route("/", get(list_notifications))
}

pub async fn list_notifications(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<dto::NotificationListParams>,
) -> impl IntoResponse {
    let notification_query = params.into_query();
    let items = state
        .feed
        .visible(&notification_query)
        .into_iter()
        .cloned()
        .collect();

    Json(dto::NotificationListResponse {
        items,
        unread: state.feed.unread_count(),
    })
}
