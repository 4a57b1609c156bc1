//! HTTP facade over the catalog for map UIs and other remote consumers.

mod handlers;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;

pub fn build_router() -> Router {
    Router::new()
        .route("/api/cities", get(handlers::city_list))
        .route("/api/cities/{id}", get(handlers::city_by_id))
        .route("/api/sample", get(handlers::sample))
        .route("/api/region", get(handlers::region))
        .layer(CorsLayer::permissive())
}

pub async fn start(host: &str, port: u16) {
    let app = build_router();
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| {
            eprintln!("Error: Cannot bind to {}: {}", addr, e);
            std::process::exit(1);
        });

    eprintln!("  Michigan cities server listening on http://{}", addr);
    eprintln!("  Press Ctrl+C to stop.");

    axum::serve(listener, app).await.unwrap_or_else(|e| {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    });
}
