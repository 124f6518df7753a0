//! SQLite storage backend implementation.
//!
//! Uses `rusqlite` for synchronous operations and `tokio-rusqlite` to run
//! them off the async executor. The schema is created when the repository
//! is opened.

mod conversions;
mod error;
mod repository;
mod schema;

pub use repository::SqliteItemRepository;
