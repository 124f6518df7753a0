//! Item and filter validation.
//!
//! Field rules come from `catalogfx_core::catalog`; currency rules are
//! checked against the symbol table of a [`SymbolMemo`], so one operation
//! fetches the table at most once however many fields need it.

use catalogfx_core::catalog::{
    check_filter_currencies, check_filter_fields, check_item_currency, check_item_fields,
    filter_needs_symbols, item_needs_symbols, CatalogError, ItemDraft, ItemFilter,
    ValidationErrors,
};

use crate::rates::SymbolMemo;

/// Validates an item payload, collecting every failed rule.
pub async fn validate_item(draft: &ItemDraft, memo: &SymbolMemo<'_>) -> Result<(), CatalogError> {
    let mut issues = check_item_fields(draft);

    if item_needs_symbols(draft) {
        let symbols = memo.get().await?;
        issues.extend(check_item_currency(draft, symbols));
    }

    ValidationErrors::into_result(issues)?;
    Ok(())
}

/// Validates a listing filter, collecting every failed rule.
pub async fn validate_filter(
    filter: &ItemFilter,
    memo: &SymbolMemo<'_>,
) -> Result<(), CatalogError> {
    let mut issues = check_filter_fields(filter);

    if filter_needs_symbols(filter) {
        let symbols = memo.get().await?;
        issues.extend(check_filter_currencies(filter, symbols));
    }

    ValidationErrors::into_result(issues)?;
    Ok(())
}
