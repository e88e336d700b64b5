//! The two interchangeable `Repository` backends.

pub mod json;
pub mod postgres;

pub use json::JsonStorage;
pub use postgres::PostgresStorage;
