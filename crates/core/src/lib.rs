//! Functional core for catalogfx.
//!
//! Pure domain types and functions plus the trait seams (`Cache`,
//! `ItemRepository`, `RateSource`) the application crate implements.

pub mod cache;
pub mod catalog;
pub mod conversion;
pub mod rates;
pub mod storage;
