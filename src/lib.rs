//! Simple CRUD: a REST service for a single named-number record type,
//! persisted in a SQLite file with soft-delete semantics.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod state;
pub mod store;

pub use error::AppError;
pub use model::{NewSimple, Simple, SimpleInput};
pub use routes::{common_routes, simple_routes};
pub use state::AppState;
pub use store::SimpleStore;
