//! Shared application state for all routes.

use crate::store::SimpleStore;

#[derive(Clone)]
pub struct AppState {
    pub store: SimpleStore,
}
