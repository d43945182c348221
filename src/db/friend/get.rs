use crate::{db::store::JsonStore, errors::AppError, models::friend::Friend};

pub async fn get_friends(store: &JsonStore) -> Result<Vec<Friend>, AppError> {
    store.read_table("friends").await
}
