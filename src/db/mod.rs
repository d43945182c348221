pub mod friend;
pub mod season;
pub mod store;
