#[tokio::main]
async fn main() {
    partnerdesk_observability::init();

    let state = partnerdesk_api::app::AppState::new(
        partnerdesk_api::seed::products(),
        partnerdesk_api::seed::notifications(),
    );
    let app = partnerdesk_api::app::build_app(state);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8080")
        .await
        .expect("failed to bind 0.0.0.0:8080");

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
