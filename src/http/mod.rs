pub mod handlers;
pub mod routes;

use axum::http::HeaderName;

pub use routes::create_http_routes;

/// Response header carrying the pre-pagination record count.
pub const NUMBER_OF_RECORDS: HeaderName = HeaderName::from_static("number-of-records");
