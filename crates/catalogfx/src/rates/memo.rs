use tokio::sync::OnceCell;

use catalogfx_core::catalog::CatalogError;
use catalogfx_core::rates::SymbolTable;

use super::RateProvider;

/// Symbol table memoized for the lifetime of one operation.
///
/// The first [`get`](Self::get) asks the provider; later calls reuse that
/// table. A failed fetch is not remembered, so a later call retries. The
/// memo is dropped with the operation that created it.
pub struct SymbolMemo<'a> {
    provider: &'a RateProvider,
    symbols: OnceCell<SymbolTable>,
}

impl<'a> SymbolMemo<'a> {
    pub fn new(provider: &'a RateProvider) -> Self {
        Self {
            provider,
            symbols: OnceCell::new(),
        }
    }

    pub async fn get(&self) -> Result<&SymbolTable, CatalogError> {
        self.symbols
            .get_or_try_init(|| self.provider.symbols())
            .await
    }
}
