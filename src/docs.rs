use utoipa::OpenApi;

use crate::{
    errors::ErrorMessage,
    models::{friend::FriendWithSeason, season::SeasonSummary},
};

/// OpenAPI document for the query endpoint, served by Swagger UI at `/docs`
/// and as JSON at `/api-docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Friends JSON backend",
        description = "Read-only query service over the friends and seasons datasets."
    ),
    paths(crate::http::handlers::friends::query_friends_handler),
    components(schemas(FriendWithSeason, SeasonSummary, ErrorMessage)),
    tags((name = "friends", description = "Filtered, joined, paginated friend lookups"))
)]
pub struct ApiDoc;
