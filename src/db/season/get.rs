use crate::{db::store::JsonStore, errors::AppError, models::season::Season};

pub async fn get_seasons(store: &JsonStore) -> Result<Vec<Season>, AppError> {
    store.read_table("seasons").await
}
