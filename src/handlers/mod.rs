//! HTTP request handlers.

pub mod simple;
