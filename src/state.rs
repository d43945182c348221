use crate::db::store::JsonStore;

#[derive(Clone)]
pub struct AppState {
    pub store: JsonStore,
}
