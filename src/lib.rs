pub mod config;
pub mod db;
mod docs;
pub mod errors;
pub mod http;
mod middleware;
pub mod models;
pub mod query;
pub mod state;

use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{config::ServerConfig, db::store::JsonStore, state::AppState};

pub async fn start_server(config: ServerConfig) {
    let state = AppState {
        store: JsonStore::new(&config.data_dir),
    };

    let app = Router::new()
        .merge(http::create_http_routes(state))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", docs::ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::cors_layer(&config.allowed_origins))
        .fallback(|| async { "404 Not Found" });

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .expect("Failed to bind address");

    tracing::info!(
        "Friends JSON backend running, Swagger UI at http://{}/docs",
        config.bind_addr()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("server stopped, socket released");
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to listen for shutdown signal");

    tracing::info!("shutdown signal received");
}
