use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One row of the seasons dataset. Fields the join never touches are
/// dropped at deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Season {
    pub id: i64,
    pub season: i64,
    pub years: String,
}

/// The season subset attached to each returned friend.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeasonSummary {
    pub id: i64,
    pub season: i64,
    pub years: String,
}

impl From<&Season> for SeasonSummary {
    fn from(season: &Season) -> Self {
        Self {
            id: season.id,
            season: season.season,
            years: season.years.clone(),
        }
    }
}
