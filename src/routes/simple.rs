//! Simple record routes, mounted under /api.

use crate::handlers::simple::{create, delete as delete_handler, get as get_handler, list};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn simple_routes(state: AppState) -> Router {
    Router::new()
        .route("/simple", get(list).post(create))
        .route("/simple/:id", get(get_handler).delete(delete_handler))
        .with_state(state)
}
