//! Rate source integration.
//!
//! - [`FixerClient`]: HTTP implementation of `RateSource`
//! - [`RateProvider`]: cached access to rates and symbols
//! - [`SymbolMemo`]: one symbol fetch per operation

mod fixer;
mod memo;
mod provider;

pub use fixer::FixerClient;
pub use memo::SymbolMemo;
pub use provider::RateProvider;
