use axum::{Router, routing::get};

use crate::{http::handlers::query_friends_handler, state::AppState};

pub fn create_http_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/friends/{page}/{limit}/{filter}",
            get(query_friends_handler),
        )
        .with_state(state)
}
