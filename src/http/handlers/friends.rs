use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    errors::{AppError, ErrorMessage},
    http::NUMBER_OF_RECORDS,
    models::friend::FriendWithSeason,
    query::{self, QueryParams},
    state::AppState,
};

#[utoipa::path(
    get,
    path = "/api/friends/{page}/{limit}/{filter}",
    tag = "friends",
    params(
        ("page" = String, Path, description = "1-based page index (min: 1)", example = "1"),
        ("limit" = String, Path, description = "Records per page", example = "3"),
        ("filter" = String, Path, description = "Case-insensitive substring matched on name or summary; star (*) disables filtering", example = "where"),
    ),
    responses(
        (status = 200, description = "One page of friends, each with its season attached", body = [FriendWithSeason],
            headers(("number-of-records" = String, description = "Total matching records before pagination"))),
        (status = 400, description = "Malformed parameter, unreadable dataset, or dangling season reference", body = ErrorMessage),
    ),
)]
pub async fn query_friends_handler(
    State(state): State<AppState>,
    Path((page, limit, filter)): Path<(String, String, String)>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorMessage>)> {
    let params = parse_params(&page, &limit, filter).map_err(|e| e.to_response())?;

    let friend_page = query::query_friends(&state.store, &params)
        .await
        .map_err(|e| {
            tracing::error!("friends query failed: {}", e);
            e.to_response()
        })?;

    Ok((
        [(NUMBER_OF_RECORDS, friend_page.total_count.to_string())],
        Json(friend_page.records),
    ))
}

fn parse_params(page: &str, limit: &str, filter: String) -> Result<QueryParams, AppError> {
    Ok(QueryParams {
        page: parse_positive(page, "page")?,
        limit: parse_positive(limit, "limit")?,
        filter,
    })
}

fn parse_positive(raw: &str, name: &str) -> Result<usize, AppError> {
    match raw.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(AppError::MalformedParameter(format!(
            "{name} must be a positive integer, got '{raw}'"
        ))),
    }
}
