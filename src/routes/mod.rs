//! Route construction.

pub mod common;
pub mod simple;

pub use common::common_routes;
pub use simple::simple_routes;
