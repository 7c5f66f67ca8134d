//! Shared application state for all routes.

use crate::store::BookStore;

#[derive(Clone)]
pub struct AppState {
    pub store: BookStore,
}

impl AppState {
    pub fn new(store: BookStore) -> Self {
        AppState { store }
    }
}
