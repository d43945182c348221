pub mod friend;
pub mod season;

pub use friend::{Friend, FriendWithSeason};
pub use season::{Season, SeasonSummary};
