//! Redis cache backend implementation.
//!
//! Provides a shared cache for multi-instance deployments, using a
//! connection manager for reconnects and `SET EX` for expiry.

mod cache;
mod error;

pub use cache::RedisCache;
