use crate::{
    db::{friend::get_friends, season::get_seasons, store::JsonStore},
    errors::AppError,
    models::{
        friend::{Friend, FriendWithSeason},
        season::{Season, SeasonSummary},
    },
};

/// Filter sentinel meaning "match everything".
pub const FILTER_ALL: &str = "*";

#[derive(Debug, Clone)]
pub struct QueryParams {
    /// 1-based page index.
    pub page: usize,
    /// Records per page.
    pub limit: usize,
    /// `*` or a case-insensitive substring matched against name and summary.
    pub filter: String,
}

#[derive(Debug)]
pub struct FriendPage {
    pub records: Vec<FriendWithSeason>,
    /// Count of filtered records before pagination, reported out of band
    /// in the `number-of-records` header.
    pub total_count: usize,
}

pub async fn query_friends(
    store: &JsonStore,
    params: &QueryParams,
) -> Result<FriendPage, AppError> {
    // The two table reads are independent, so issue them together.
    let (friends, seasons) = tokio::try_join!(get_friends(store), get_seasons(store))?;

    build_page(friends, &seasons, params)
}

/// Filter, count, paginate, join. Kept free of I/O so the whole pipeline
/// is testable against in-memory datasets.
pub fn build_page(
    friends: Vec<Friend>,
    seasons: &[Season],
    params: &QueryParams,
) -> Result<FriendPage, AppError> {
    let filtered = if params.filter == FILTER_ALL {
        friends
    } else {
        let needle = params.filter.to_lowercase();
        friends
            .into_iter()
            .filter(|f| {
                f.name.to_lowercase().contains(&needle)
                    || f.summary.to_lowercase().contains(&needle)
            })
            .collect()
    };

    // Counted before the page window is applied; pagination must never
    // change the reported total.
    let total_count = filtered.len();

    let from_index = params.page.saturating_sub(1).saturating_mul(params.limit);

    let records = filtered
        .into_iter()
        .skip(from_index)
        .take(params.limit)
        .map(|friend| attach_season(friend, seasons))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(FriendPage {
        records,
        total_count,
    })
}

fn attach_season(friend: Friend, seasons: &[Season]) -> Result<FriendWithSeason, AppError> {
    // Linear scan per record; fine at this dataset size. Build a lookup map
    // keyed by season id if the tables ever grow.
    let season = seasons
        .iter()
        .find(|s| s.id == friend.season_id)
        .ok_or(AppError::JoinIntegrity {
            friend_id: friend.id,
            season_id: friend.season_id,
        })?;

    Ok(FriendWithSeason {
        id: friend.id,
        name: friend.name,
        summary: friend.summary,
        season_id: friend.season_id,
        season: SeasonSummary::from(season),
    })
}
