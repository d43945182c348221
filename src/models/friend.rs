use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::season::SeasonSummary;

/// One row of the friends dataset.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Friend {
    pub id: i64,
    pub name: String,
    pub summary: String,
    pub season_id: i64,
}

/// A friend as returned by the query endpoint: all dataset fields plus the
/// joined season subset.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FriendWithSeason {
    pub id: i64,
    pub name: String,
    pub summary: String,
    pub season_id: i64,
    pub season: SeasonSummary,
}
