pub mod friends;

pub use friends::query_friends_handler;
