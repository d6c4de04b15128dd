use crate::users::store::UserStore;

#[derive(Clone, Default)]
pub struct AppState {
    pub store: UserStore,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            store: UserStore::new(),
        }
    }
}
