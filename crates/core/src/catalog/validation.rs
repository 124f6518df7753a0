//! Pure validation rules for items and filters.
//!
//! Rules that need the symbol table take it as an argument; fetching it is
//! the caller's concern.

use rust_decimal::Decimal;

use super::error::ValidationIssue;
use super::types::{ItemDraft, ItemFilter};
use crate::rates::SymbolTable;

/// Returns true if `code` has the shape of a currency code (three ASCII letters).
pub fn is_currency_code(code: &str) -> bool {
    code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic())
}

/// Checks the rules of an item that do not depend on the symbol table.
pub fn check_item_fields(draft: &ItemDraft) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if draft.name.trim().is_empty() {
        issues.push(ValidationIssue::EmptyName);
    }
    if draft.price <= Decimal::ZERO {
        issues.push(ValidationIssue::NonPositivePrice);
    }
    if draft.origin_currency.trim().is_empty() {
        issues.push(ValidationIssue::MissingOriginCurrency);
    } else if !is_currency_code(&draft.origin_currency) {
        issues.push(ValidationIssue::MalformedOriginCurrency);
    }

    issues
}

/// Returns true if the item's currency has to be looked up in the symbol table.
pub fn item_needs_symbols(draft: &ItemDraft) -> bool {
    !draft.origin_currency.trim().is_empty()
}

/// Checks the item's origin currency against the symbol table.
pub fn check_item_currency(draft: &ItemDraft, symbols: &SymbolTable) -> Option<ValidationIssue> {
    (!symbols.contains_key(&draft.origin_currency)).then_some(ValidationIssue::UnknownOriginCurrency)
}

/// Checks the rules of a filter that do not depend on the symbol table.
pub fn check_filter_fields(filter: &ItemFilter) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if filter.page < 1 {
        issues.push(ValidationIssue::InvalidPage);
    }
    if filter.page_size < 1 {
        issues.push(ValidationIssue::InvalidPageSize);
    }

    issues
}

/// Returns true if any filter currency has to be looked up in the symbol table.
pub fn filter_needs_symbols(filter: &ItemFilter) -> bool {
    filter.origin_criterion().is_some() || !filter.target_currencies.is_empty()
}

/// Checks the filter's origin and target currencies against the symbol table.
pub fn check_filter_currencies(filter: &ItemFilter, symbols: &SymbolTable) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if let Some(code) = filter.origin_criterion() {
        if !symbols.contains_key(code) {
            issues.push(ValidationIssue::UnknownOriginCurrency);
        }
    }
    if !filter
        .target_currencies
        .iter()
        .all(|code| symbols.contains_key(code))
    {
        issues.push(ValidationIssue::UnknownTargetCurrency);
    }

    issues
}
